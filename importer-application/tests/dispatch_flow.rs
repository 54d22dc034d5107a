//! 调度全流程集成测试：组合根建表 -> 动态解析 -> 处理器执行
use importer_application::CommandDispatcher;
use importer_application::collaborators::Collaborators;
use importer_application::command_bus::CommandBus;
use importer_application::context::AppContext;
use importer_application::error::AppError;
use importer_application::handler::{
    ImportLocalFiles, ImportLocalFilesHandler, ImportRemoteFiles, ImportRemoteFilesHandler,
};
use importer_domain::file_system::{InMemoryFileSystem, LocalFileSystem};
use importer_domain::remote::{InMemoryRemoteClient, RemoteClient};
use std::sync::Arc;

fn composition() -> CommandDispatcher {
    let collaborators = Arc::new(Collaborators::new());
    collaborators.provide::<Arc<dyn LocalFileSystem>>(Arc::new(InMemoryFileSystem::default()));
    collaborators.provide::<Arc<dyn RemoteClient>>(Arc::new(InMemoryRemoteClient::default()));

    let mut dispatcher = CommandDispatcher::new(collaborators);
    dispatcher.register::<ImportLocalFiles, ImportLocalFilesHandler>();
    dispatcher.register::<ImportRemoteFiles, ImportRemoteFilesHandler>();
    dispatcher
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn local_and_remote_commands_reach_their_handlers() {
    let dispatcher = composition();
    let ctx = AppContext::default();

    dispatcher
        .dispatch(
            &ctx,
            ImportLocalFiles {
                import_directory: "Folder 1".to_string(),
            },
        )
        .await
        .unwrap();
    dispatcher
        .dispatch(
            &ctx,
            ImportRemoteFiles {
                url: "sftp://user@host.com/my-folder".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(dispatcher.cache().len(), 2);
    assert_eq!(dispatcher.cache().scan_count(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn repeated_dispatch_reuses_the_cached_resolution() {
    let dispatcher = composition();
    let ctx = AppContext::default();

    for _ in 0..3 {
        dispatcher
            .dispatch(
                &ctx,
                ImportLocalFiles {
                    import_directory: "Folder 1".to_string(),
                },
            )
            .await
            .unwrap();
    }

    assert_eq!(dispatcher.cache().scan_count(), 1);
    assert_eq!(dispatcher.cache().hit_count(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_collaborator_fails_the_dispatch() {
    // 空注册表：解析成功但构建处理器时缺少文件系统能力
    let mut dispatcher = CommandDispatcher::new(Arc::new(Collaborators::new()));
    dispatcher.register::<ImportLocalFiles, ImportLocalFilesHandler>();

    let ctx = AppContext::default();
    let err = dispatcher
        .dispatch(
            &ctx,
            ImportLocalFiles {
                import_directory: "Folder 1".to_string(),
            },
        )
        .await
        .unwrap_err();
    match err {
        AppError::DependencyMissing { capability } => {
            assert!(capability.contains("LocalFileSystem"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
