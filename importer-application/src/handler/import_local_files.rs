use crate::collaborators::{Collaborators, FromCollaborators};
use crate::command::Command;
use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::error::AppError;
use async_trait::async_trait;
use importer_domain::file_system::LocalFileSystem;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 从本地目录导入文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportLocalFiles {
    pub import_directory: String,
}

impl Command for ImportLocalFiles {
    const NAME: &'static str = "import.local_files";
}

pub struct ImportLocalFilesHandler {
    file_system: Arc<dyn LocalFileSystem>,
}

impl std::fmt::Debug for ImportLocalFilesHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportLocalFilesHandler").finish()
    }
}

impl ImportLocalFilesHandler {
    pub fn new(file_system: Arc<dyn LocalFileSystem>) -> Self {
        Self { file_system }
    }
}

impl FromCollaborators for ImportLocalFilesHandler {
    fn from_collaborators(collaborators: &Collaborators) -> Result<Self, AppError> {
        Ok(Self::new(
            collaborators.resolve::<Arc<dyn LocalFileSystem>>()?,
        ))
    }
}

#[async_trait]
impl CommandHandler<ImportLocalFiles> for ImportLocalFilesHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: ImportLocalFiles) -> Result<(), AppError> {
        println!("Importing files from the local file system.");
        for file in self.file_system.files(&cmd.import_directory)? {
            println!("Reading {file}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use importer_domain::error::DomainResult;
    use importer_domain::file_system::FileDescriptor;
    use std::sync::Mutex;

    /// 记录被枚举目录的测试替身
    struct RecordingFileSystem {
        seen: Mutex<Vec<String>>,
    }

    impl LocalFileSystem for RecordingFileSystem {
        fn file(&self, path: &str) -> DomainResult<FileDescriptor> {
            Ok(FileDescriptor::new(path))
        }

        fn files(
            &self,
            directory: &str,
        ) -> DomainResult<Box<dyn Iterator<Item = FileDescriptor> + Send>> {
            self.seen.lock().unwrap().push(directory.to_string());
            Ok(Box::new(std::iter::empty()))
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn handler_enumerates_the_requested_directory() {
        let fs = Arc::new(RecordingFileSystem {
            seen: Mutex::new(Vec::new()),
        });
        let handler = ImportLocalFilesHandler::new(fs.clone());

        let ctx = AppContext::default();
        handler
            .handle(
                &ctx,
                ImportLocalFiles {
                    import_directory: "Folder 1".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(*fs.seen.lock().unwrap(), vec!["Folder 1"]);
    }

    #[test]
    fn construction_requires_the_file_system_capability() {
        let collaborators = Collaborators::new();
        let err = ImportLocalFilesHandler::from_collaborators(&collaborators).unwrap_err();
        assert!(matches!(err, AppError::DependencyMissing { .. }));
    }
}
