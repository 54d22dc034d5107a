//! 协作者注册表（依赖构建）
//!
//! 组合根在此登记处理器所需的外部能力（如本地文件系统、远端客户端），
//! 处理器工厂按“句柄类型”显式解析，替代构造后的反向注入：
//! - 键为句柄类型的 `TypeId`（如 `Arc<dyn LocalFileSystem>`）；
//! - 同类型重复 `provide` 直接覆盖，效果幂等；
//! - 未登记的能力在构建处理器时报 [`AppError::DependencyMissing`]。
//!
use crate::error::AppError;
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};

/// 协作者注册表
#[derive(Default)]
pub struct Collaborators {
    entries: DashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Collaborators {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一项能力（同类型重复登记覆盖旧值）
    pub fn provide<T>(&self, value: T)
    where
        T: Clone + Send + Sync + 'static,
    {
        self.entries.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// 解析一项能力；未登记返回 `DependencyMissing`
    pub fn resolve<T>(&self) -> Result<T, AppError>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value().downcast_ref::<T>().cloned())
            .ok_or(AppError::DependencyMissing {
                capability: type_name::<T>(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 从协作者注册表构建自身（处理器工厂的显式依赖入口）
///
/// 处理器在此声明其全部依赖：实现里逐项 `resolve`，任何缺失都会让
/// 构建失败并上浮到调度调用方。
pub trait FromCollaborators: Sized {
    fn from_collaborators(collaborators: &Collaborators) -> Result<Self, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    trait Greeter: Send + Sync + std::fmt::Debug {
        fn greet(&self) -> String;
    }

    #[derive(Debug)]
    struct En;

    impl Greeter for En {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    #[derive(Debug)]
    struct Zh;

    impl Greeter for Zh {
        fn greet(&self) -> String {
            "你好".to_string()
        }
    }

    #[test]
    fn provide_and_resolve_trait_object_handle() {
        let collaborators = Collaborators::new();
        collaborators.provide::<Arc<dyn Greeter>>(Arc::new(En));

        let greeter = collaborators.resolve::<Arc<dyn Greeter>>().unwrap();
        assert_eq!(greeter.greet(), "hello");
    }

    #[test]
    fn missing_capability_is_reported_by_name() {
        let collaborators = Collaborators::new();
        let err = collaborators.resolve::<Arc<dyn Greeter>>().unwrap_err();
        match err {
            AppError::DependencyMissing { capability } => assert!(capability.contains("Greeter")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn re_provide_overwrites_previous_value() {
        let collaborators = Collaborators::new();
        collaborators.provide::<Arc<dyn Greeter>>(Arc::new(En));
        collaborators.provide::<Arc<dyn Greeter>>(Arc::new(Zh));

        let greeter = collaborators.resolve::<Arc<dyn Greeter>>().unwrap();
        assert_eq!(greeter.greet(), "你好");
        assert_eq!(collaborators.len(), 1);
    }
}
