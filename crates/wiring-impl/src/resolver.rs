//! 类型化解析门面
//!
//! 面向核心之外应用代码的薄封装：`get::<T>()` 透传给
//! [`DependencyResolver`]，在边界处完成类型收窄。自身不持有状态。

use std::any::TypeId;
use std::sync::Arc;
use wiring_abstractions::DependencyResolver;
use wiring_common::{Component, ResolveError, ResolveResult};

/// 依赖解析门面
///
/// 外部组件只通过它获取依赖，不得自行构造，以保持单实例保证。
#[derive(Clone)]
pub struct Resolver {
    inner: Arc<dyn DependencyResolver>,
}

impl Resolver {
    /// 基于任意解析器创建门面
    pub fn new(inner: Arc<dyn DependencyResolver>) -> Self {
        Self { inner }
    }

    /// 解析指定类型的组件单例
    pub async fn get<T: Component>(&self) -> ResolveResult<Arc<T>> {
        let raw = self
            .inner
            .resolve_by_type_id(TypeId::of::<T>())
            .await
            .map_err(|err| match err {
                ResolveError::ComponentNotRegistered { .. } => {
                    ResolveError::ComponentNotRegistered {
                        type_name: std::any::type_name::<T>().to_string(),
                    }
                }
                other => other,
            })?;
        raw.downcast::<T>().map_err(|_| ResolveError::TypeMismatch {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    /// 按逻辑名称解析组件单例
    pub async fn get_by_name<T: Component>(&self, name: &str) -> ResolveResult<Arc<T>> {
        let raw = self.inner.resolve_by_name(name).await?;
        raw.downcast::<T>().map_err(|_| ResolveError::TypeMismatch {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    /// 检查是否可以解析指定类型
    pub fn can_get<T: Component>(&self) -> bool {
        self.inner.can_resolve_by_type_id(TypeId::of::<T>())
    }
}
