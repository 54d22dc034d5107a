//! 远端客户端协作者（Remote Client）
//!
use crate::error::DomainResult;

/// 远端客户端契约：按远端目录枚举下载地址（惰性、有限）
pub trait RemoteClient: Send + Sync {
    fn download_urls(&self, folder: &str) -> DomainResult<Box<dyn Iterator<Item = String> + Send>>;
}

/// 内存桩实现：返回固定下载地址，用于示例与测试
pub struct InMemoryRemoteClient {
    urls: Vec<String>,
}

impl InMemoryRemoteClient {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }
}

impl Default for InMemoryRemoteClient {
    fn default() -> Self {
        Self::new(vec!["url:A".to_string(), "url:B".to_string()])
    }
}

impl RemoteClient for InMemoryRemoteClient {
    fn download_urls(&self, _folder: &str) -> DomainResult<Box<dyn Iterator<Item = String> + Send>> {
        let urls = self.urls.clone();
        Ok(Box::new(urls.into_iter()))
    }
}
