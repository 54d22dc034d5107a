use bon::Builder;
use serde::{Deserialize, Serialize};

/// 应用层上下文（Application Context）
///
/// 承载一次命令调度所需的横切信息，例如：
/// - 关联追踪 `correlation_id` 与执行者 `actor_id`；
/// - 幂等键（`idempotency_key`）：用于在基础设施层实现请求幂等。
///
/// 典型用法：
/// ```rust
/// use importer_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .maybe_correlation_id(Some("cor-123".into()))
///     .maybe_actor_id(Some("u-1".into()))
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// ```
#[derive(Builder, Default, Debug, Clone, Serialize, Deserialize)]
pub struct AppContext {
    /// 关联ID（链路追踪）
    correlation_id: Option<String>,
    /// 触发本次调用的主体ID
    actor_id: Option<String>,
    /// 幂等键（可选）：为空则由上层或基础设施决定是否参与幂等
    idempotency_key: Option<String>,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }
}
