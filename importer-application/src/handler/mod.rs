//! 参考处理器（协作者边界示例）
//!
//! 每个处理器只认领一个命令变体，业务内容为桩：打印进度并枚举
//! 协作者给出的条目。命令与处理器同文件存放。
//!
pub mod import_local_files;
pub mod import_remote_files;

pub use import_local_files::{ImportLocalFiles, ImportLocalFilesHandler};
pub use import_remote_files::{ImportRemoteFiles, ImportRemoteFilesHandler};
