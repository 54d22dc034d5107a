//! 组合根：登记协作者、建调度器，把原始位置字符串解析为命令后调度。
//!
//! 位置以 `sftp` 开头视为远端导入，否则视为本地导入；不带参数运行时
//! 依次执行两个内置示例位置。
//!
use importer_application::CommandDispatcher;
use importer_application::collaborators::Collaborators;
use importer_application::command_bus::CommandBus;
use importer_application::context::AppContext;
use importer_application::handler::{
    ImportLocalFiles, ImportLocalFilesHandler, ImportRemoteFiles, ImportRemoteFilesHandler,
};
use importer_domain::file_system::{InMemoryFileSystem, LocalFileSystem};
use importer_domain::remote::{InMemoryRemoteClient, RemoteClient};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// 封闭的命令集合：解析产物在组合根处 `match` 调度（单一入口，无运行时转型）
enum ImportCommand {
    Local(ImportLocalFiles),
    Remote(ImportRemoteFiles),
}

fn parse_location(location: &str) -> ImportCommand {
    if location.starts_with("sftp") {
        ImportCommand::Remote(ImportRemoteFiles {
            url: location.to_string(),
        })
    } else {
        ImportCommand::Local(ImportLocalFiles {
            import_directory: location.to_string(),
        })
    }
}

fn composition() -> CommandDispatcher {
    let collaborators = Arc::new(Collaborators::new());
    collaborators.provide::<Arc<dyn LocalFileSystem>>(Arc::new(InMemoryFileSystem::default()));
    collaborators.provide::<Arc<dyn RemoteClient>>(Arc::new(InMemoryRemoteClient::default()));

    let mut dispatcher = CommandDispatcher::new(collaborators);
    dispatcher.register::<ImportLocalFiles, ImportLocalFilesHandler>();
    dispatcher.register::<ImportRemoteFiles, ImportRemoteFilesHandler>();
    dispatcher
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 结构化日志走 stderr，stdout 留给处理器的导入输出
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let dispatcher = composition();
    let ctx = AppContext::builder()
        .maybe_correlation_id(Some("demo-1".into()))
        .build();

    let mut locations: Vec<String> = std::env::args().skip(1).collect();
    if locations.is_empty() {
        locations = vec![
            "Folder 1".to_string(),
            "sftp://user@host.com/my-folder".to_string(),
        ];
    }

    for location in &locations {
        tracing::debug!(%location, "dispatching import");
        match parse_location(location) {
            ImportCommand::Local(cmd) => dispatcher.dispatch(&ctx, cmd).await?,
            ImportCommand::Remote(cmd) => dispatcher.dispatch(&ctx, cmd).await?,
        }
    }

    Ok(())
}
