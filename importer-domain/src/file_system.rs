//! 本地文件系统协作者（Local File System）
//!
//! 处理器侧只依赖 [`LocalFileSystem`] 契约；枚举结果是惰性序列，
//! 一次调用返回的迭代器不可重置，重新枚举需再次调用。
//!
use crate::error::DomainResult;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// 文件描述符（值对象）
///
/// 以路径标识一个文件；相等性按路径比较，与引用无关。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileDescriptor {
    path: String,
}

impl FileDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Display for FileDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// 本地文件系统契约
pub trait LocalFileSystem: Send + Sync {
    /// 按路径取单个文件
    fn file(&self, path: &str) -> DomainResult<FileDescriptor>;

    /// 枚举目录下的文件（惰性、有限；每次调用重新枚举）
    fn files(&self, directory: &str) -> DomainResult<Box<dyn Iterator<Item = FileDescriptor> + Send>>;
}

/// 内存桩实现：返回固定条目，用于示例与测试
pub struct InMemoryFileSystem {
    entries: Vec<String>,
}

impl InMemoryFileSystem {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl Default for InMemoryFileSystem {
    fn default() -> Self {
        Self::new(vec!["A".to_string(), "B".to_string()])
    }
}

impl LocalFileSystem for InMemoryFileSystem {
    fn file(&self, path: &str) -> DomainResult<FileDescriptor> {
        Ok(FileDescriptor::new(path))
    }

    fn files(&self, _directory: &str) -> DomainResult<Box<dyn Iterator<Item = FileDescriptor> + Send>> {
        let entries = self.entries.clone();
        Ok(Box::new(entries.into_iter().map(FileDescriptor::new)))
    }
}
