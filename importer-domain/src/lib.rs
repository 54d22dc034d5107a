//! 导入领域层（importer-domain）
//!
//! 定义文件导入场景下处理器所依赖的外部能力契约与最小必要的值对象：
//! - 本地文件系统（`file_system`）：按目录枚举文件、按路径取单个文件
//! - 远端客户端（`remote`）：按远端目录枚举下载地址
//! - 错误（`error`）：统一的 `DomainError` 与 `DomainResult`
//!
//! 本 crate 不含任何调度逻辑；内存桩实现（`InMemoryFileSystem`、
//! `InMemoryRemoteClient`）用于示例与测试，真实基础设施可在外部适配实现。
//!
pub mod error;
pub mod file_system;
pub mod remote;
