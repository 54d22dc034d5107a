//! 导入应用层（importer-application）
//!
//! 围绕“命令分发”提供两种解析策略与配套构件：
//! - 静态绑定（`static_command_bus`）：组合期一次性建表，调度 O(1)，
//!   同一命令重复注册在注册期即被拒绝；
//! - 动态解析 + 缓存（`dispatcher`）：首次调度扫描候选集，结果写入
//!   `handler_cache`，零匹配/多匹配分别报 `HandlerNotFound` / `AmbiguousHandler`；
//! - 依赖构建（`collaborators`）：处理器以显式工厂参数从注册表解析协作者；
//! - 参考处理器（`handler`）：本地/远端文件导入，演示契约边界。
//!
//! 典型用法：
//! 1. 组合根向 [`collaborators::Collaborators`] 注册协作者能力；
//! 2. 构建 [`CommandDispatcher`] 并 `register::<C, H>()` 候选处理器；
//! 3. 业务侧构造命令并经 [`command_bus::CommandBus::dispatch`] 调度。
//!
pub mod collaborators;
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod handler_cache;
pub mod static_command_bus;

pub use dispatcher::CommandDispatcher;
pub use static_command_bus::StaticCommandBus;
