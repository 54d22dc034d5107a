//! 领域层统一错误定义
//!
//! 聚焦协作者（文件系统/远端客户端）与位置解析的最小必要集合，
//! 便于在应用层统一转换为调度错误。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("file system error: {reason}")]
    FileSystem { reason: String },

    #[error("remote client error: {reason}")]
    RemoteClient { reason: String },

    #[error("invalid location: {reason}")]
    InvalidLocation { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// 允许在基础设施实现中直接使用 `?` 将 IO 错误转换为 DomainError
impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::FileSystem {
            reason: err.to_string(),
        }
    }
}
