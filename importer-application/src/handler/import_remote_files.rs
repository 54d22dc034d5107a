use crate::collaborators::{Collaborators, FromCollaborators};
use crate::command::Command;
use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::error::AppError;
use async_trait::async_trait;
use importer_domain::remote::RemoteClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 从远端地址导入文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRemoteFiles {
    pub url: String,
}

impl Command for ImportRemoteFiles {
    const NAME: &'static str = "import.remote_files";
}

pub struct ImportRemoteFilesHandler {
    remote_client: Arc<dyn RemoteClient>,
}

impl ImportRemoteFilesHandler {
    pub fn new(remote_client: Arc<dyn RemoteClient>) -> Self {
        Self { remote_client }
    }
}

impl FromCollaborators for ImportRemoteFilesHandler {
    fn from_collaborators(collaborators: &Collaborators) -> Result<Self, AppError> {
        Ok(Self::new(collaborators.resolve::<Arc<dyn RemoteClient>>()?))
    }
}

#[async_trait]
impl CommandHandler<ImportRemoteFiles> for ImportRemoteFilesHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: ImportRemoteFiles) -> Result<(), AppError> {
        println!("Importing files from a remote location.");
        for url in self.remote_client.download_urls(&cmd.url)? {
            println!("Downloading {url}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use importer_domain::error::{DomainError, DomainResult};
    use importer_domain::remote::InMemoryRemoteClient;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn handler_succeeds_with_stub_urls() {
        let handler = ImportRemoteFilesHandler::new(Arc::new(InMemoryRemoteClient::default()));
        let ctx = AppContext::default();
        handler
            .handle(
                &ctx,
                ImportRemoteFiles {
                    url: "sftp://user@host.com/my-folder".to_string(),
                },
            )
            .await
            .unwrap();
    }

    /// 协作者故障应原样穿透 `handle`
    struct FailingRemoteClient;

    impl RemoteClient for FailingRemoteClient {
        fn download_urls(&self, folder: &str) -> DomainResult<Box<dyn Iterator<Item = String> + Send>> {
            Err(DomainError::RemoteClient {
                reason: format!("unreachable: {folder}"),
            })
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn collaborator_failure_propagates_unchanged() {
        let handler = ImportRemoteFilesHandler::new(Arc::new(FailingRemoteClient));
        let ctx = AppContext::default();
        let err = handler
            .handle(
                &ctx,
                ImportRemoteFiles {
                    url: "sftp://down".to_string(),
                },
            )
            .await
            .unwrap_err();
        match err {
            AppError::Domain(DomainError::RemoteClient { reason }) => {
                assert!(reason.contains("sftp://down"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
