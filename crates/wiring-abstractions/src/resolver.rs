//! 依赖解析器抽象接口
//!
//! 提供按标识符解析组件实例的能力。

use async_trait::async_trait;
use std::any::{Any, TypeId};
use std::sync::Arc;
use wiring_common::{ResolveError, ResolveResult, TypeInfo};

/// 依赖解析器 trait
///
/// 负责按标识符返回单例实例，首次请求时惰性构造。
/// 接口保持对象安全，类型收窄在外层门面完成。
#[async_trait]
pub trait DependencyResolver: Send + Sync {
    /// 解析指定类型的组件
    async fn resolve_by_type_id(
        &self,
        type_id: TypeId,
    ) -> ResolveResult<Arc<dyn Any + Send + Sync>>;

    /// 解析指定名称的组件
    async fn resolve_by_name(&self, name: &str) -> ResolveResult<Arc<dyn Any + Send + Sync>>;

    /// 检查是否可以解析指定类型
    fn can_resolve_by_type_id(&self, type_id: TypeId) -> bool;

    /// 检查是否可以解析指定名称的组件
    fn can_resolve_by_name(&self, name: &str) -> bool;
}

/// 解析上下文
///
/// 记录当前解析链。解析在完成前重新进入同一标识符即构成循环依赖，
/// 必须作为错误上报而不是任由调用栈溢出。
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    chain: Vec<TypeInfo>,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 把类型压入解析链，检测到循环时返回带完整链路的错误
    pub fn push(&mut self, type_info: TypeInfo) -> ResolveResult<()> {
        if self.chain.iter().any(|entry| entry.id == type_info.id) {
            let mut chain: Vec<&str> = self.chain.iter().map(|entry| entry.short_name()).collect();
            chain.push(type_info.short_name());
            return Err(ResolveError::DependencyCycle {
                dependency_chain: chain.join(" -> "),
            });
        }
        self.chain.push(type_info);
        Ok(())
    }

    /// 当前解析链深度
    pub fn depth(&self) -> usize {
        self.chain.len()
    }
}
