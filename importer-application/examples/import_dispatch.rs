use importer_application::collaborators::Collaborators;
use importer_application::command_bus::CommandBus;
use importer_application::context::AppContext;
use importer_application::handler::{
    ImportLocalFiles, ImportLocalFilesHandler, ImportRemoteFiles, ImportRemoteFilesHandler,
};
use importer_application::{CommandDispatcher, StaticCommandBus};
use importer_domain::file_system::{InMemoryFileSystem, LocalFileSystem};
use importer_domain::remote::{InMemoryRemoteClient, RemoteClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = AppContext::builder()
        .maybe_correlation_id(Some("cor-1".into()))
        .maybe_actor_id(Some("u-1".into()))
        .build();

    // 策略一：静态绑定——单例处理器在注册时携带依赖，调度 O(1)
    let bus = StaticCommandBus::new();
    bus.register::<ImportLocalFiles, _>(Arc::new(ImportLocalFilesHandler::new(Arc::new(
        InMemoryFileSystem::default(),
    ))))?;
    bus.register::<ImportRemoteFiles, _>(Arc::new(ImportRemoteFilesHandler::new(Arc::new(
        InMemoryRemoteClient::default(),
    ))))?;

    bus.dispatch(
        &ctx,
        ImportLocalFiles {
            import_directory: "Folder 1".to_string(),
        },
    )
    .await?;

    // 策略二：动态解析——瞬时处理器按协作者注册表构建，解析结果进缓存
    let collaborators = Arc::new(Collaborators::new());
    collaborators.provide::<Arc<dyn LocalFileSystem>>(Arc::new(InMemoryFileSystem::default()));
    collaborators.provide::<Arc<dyn RemoteClient>>(Arc::new(InMemoryRemoteClient::default()));

    let mut dispatcher = CommandDispatcher::new(collaborators);
    dispatcher.register::<ImportLocalFiles, ImportLocalFilesHandler>();
    dispatcher.register::<ImportRemoteFiles, ImportRemoteFilesHandler>();

    dispatcher
        .dispatch(
            &ctx,
            ImportRemoteFiles {
                url: "sftp://user@host.com/my-folder".to_string(),
            },
        )
        .await?;
    dispatcher
        .dispatch(
            &ctx,
            ImportRemoteFiles {
                url: "sftp://user@host.com/my-folder".to_string(),
            },
        )
        .await?;

    eprintln!(
        "scans={} hits={}",
        dispatcher.cache().scan_count(),
        dispatcher.cache().hit_count()
    );
    Ok(())
}
