//! 动态解析调度器（CommandDispatcher）
//!
//! 与静态绑定总线相对的另一种路由策略：
//! - 组合期显式登记候选处理器（命令 `TypeId` + 处理器工厂）；
//! - 首次调度某个命令变体时扫描候选集：零匹配报 `HandlerNotFound`，
//!   多匹配报 `AmbiguousHandler`，唯一匹配写入 [`HandlerCache`]；
//! - 每次调度构建瞬时处理器实例，依赖经 [`Collaborators`] 显式解析；
//! - 调用前做防御性 `can_execute` 检查，不匹配的变体报 `TypeMismatch`。
//!
//! 限制：未定义调度超时与取消语义，等待处理器 I/O 期间不持有任何锁。
//!
use crate::collaborators::{Collaborators, FromCollaborators};
use crate::command::Command;
use crate::command_bus::CommandBus;
use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::error::AppError;
use crate::handler_cache::HandlerCache;
use async_trait::async_trait;
use std::any::{Any, TypeId, type_name};
use std::marker::PhantomData;
use std::sync::Arc;

/// 类型擦除后的处理器统一入口
///
/// 动态解析策略的运行时契约：能力检查 + 执行。
#[async_trait]
pub trait ErasedCommandHandler: Send + Sync {
    /// 处理器名称（日志与诊断）
    fn handler_name(&self) -> &'static str;

    /// 是否能处理该命令（防御性检查）
    fn can_execute(&self, cmd: &(dyn Any + Send)) -> bool;

    /// 执行命令；命令变体不匹配时返回 `TypeMismatch` 而非静默忽略
    async fn execute(&self, ctx: &AppContext, cmd: Box<dyn Any + Send>) -> Result<(), AppError>;
}

/// 把强类型处理器适配为 [`ErasedCommandHandler`]
struct TypedHandler<C, H> {
    inner: H,
    _command: PhantomData<fn(C)>,
}

#[async_trait]
impl<C, H> ErasedCommandHandler for TypedHandler<C, H>
where
    C: Command,
    H: CommandHandler<C> + 'static,
{
    fn handler_name(&self) -> &'static str {
        type_name::<H>()
    }

    fn can_execute(&self, cmd: &(dyn Any + Send)) -> bool {
        cmd.is::<C>()
    }

    async fn execute(&self, ctx: &AppContext, cmd: Box<dyn Any + Send>) -> Result<(), AppError> {
        match cmd.downcast::<C>() {
            Ok(cmd) => self.inner.handle(ctx, *cmd).await,
            Err(_) => Err(AppError::TypeMismatch {
                expected: C::NAME,
                found: "unknown",
            }),
        }
    }
}

type HandlerFactory =
    Arc<dyn Fn(&Collaborators) -> Result<Box<dyn ErasedCommandHandler>, AppError> + Send + Sync>;

struct Registration {
    command: TypeId,
    command_name: &'static str,
    handler_name: &'static str,
    build: HandlerFactory,
}

/// 动态解析 + 缓存的命令调度器
pub struct CommandDispatcher {
    registrations: Vec<Registration>,
    cache: HandlerCache,
    collaborators: Arc<Collaborators>,
}

impl CommandDispatcher {
    pub fn new(collaborators: Arc<Collaborators>) -> Self {
        Self {
            registrations: Vec::new(),
            cache: HandlerCache::new(),
            collaborators,
        }
    }

    /// 登记候选处理器（组合期）
    ///
    /// 允许重复登记同一命令的多个处理器——歧义在解析期统一报告，
    /// 而不是在这里静默择一。
    pub fn register<C, H>(&mut self)
    where
        C: Command,
        H: CommandHandler<C> + FromCollaborators + 'static,
    {
        self.registrations.push(Registration {
            command: TypeId::of::<C>(),
            command_name: C::NAME,
            handler_name: type_name::<H>(),
            build: Arc::new(|collaborators: &Collaborators| {
                let handler = H::from_collaborators(collaborators)?;
                Ok(Box::new(TypedHandler::<C, H> {
                    inner: handler,
                    _command: PhantomData,
                }) as Box<dyn ErasedCommandHandler>)
            }),
        });
    }

    /// 解析缓存（观测扫描/命中计数）
    pub fn cache(&self) -> &HandlerCache {
        &self.cache
    }

    /// 已登记的候选数量
    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    fn scan(&self, command: TypeId, command_name: &'static str) -> Result<usize, AppError> {
        let mut matched = None;
        let mut candidates = 0usize;

        for (slot, registration) in self.registrations.iter().enumerate() {
            if registration.command == command {
                candidates += 1;
                if matched.is_none() {
                    matched = Some(slot);
                }
            }
        }

        match (matched, candidates) {
            (Some(slot), 1) => {
                tracing::debug!(
                    command = command_name,
                    handler = self.registrations[slot].handler_name,
                    "resolved command handler"
                );
                Ok(slot)
            }
            (Some(_), candidates) => Err(AppError::AmbiguousHandler {
                command: command_name,
                candidates,
            }),
            (None, _) => Err(AppError::HandlerNotFound(command_name)),
        }
    }

    async fn dispatch_impl<C>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>
    where
        C: Command,
    {
        let slot = self
            .cache
            .get_or_compute(TypeId::of::<C>(), || self.scan(TypeId::of::<C>(), C::NAME))?;
        let registration = &self.registrations[slot];

        // 瞬时实例：依赖在此刻解析，缺失即上浮 DependencyMissing
        let handler = (registration.build)(&self.collaborators)?;

        let cmd: Box<dyn Any + Send> = Box::new(cmd);
        if !handler.can_execute(&*cmd) {
            return Err(AppError::TypeMismatch {
                expected: registration.command_name,
                found: C::NAME,
            });
        }

        tracing::debug!(
            command = C::NAME,
            handler = registration.handler_name,
            "executing command handler"
        );
        handler.execute(ctx, cmd).await
    }
}

#[async_trait]
impl CommandBus for CommandDispatcher {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>
    where
        C: Command,
    {
        self.dispatch_impl(ctx, cmd).await
    }
}
