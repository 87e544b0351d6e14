//! 组件注册表抽象接口

use async_trait::async_trait;
use std::any::TypeId;
use wiring_common::{ComponentDescriptor, ScanResult};

/// 组件注册表 trait
///
/// 持有组件描述符集合。不变量：每个标识符至多注册一次，
/// 重复注册是启动期错误。
#[async_trait]
pub trait ComponentRegistry: Send + Sync {
    /// 注册组件描述符，标识符已存在时失败
    async fn register_descriptor(&self, descriptor: ComponentDescriptor) -> ScanResult<()>;

    /// 校验所有已注册描述符声明的依赖均可满足
    async fn validate_dependencies(&self) -> ScanResult<()>;

    /// 检查组件是否已注册（通过 TypeId）
    fn is_registered_by_type_id(&self, type_id: TypeId) -> bool;

    /// 检查组件是否已注册（通过名称）
    fn is_registered_by_name(&self, name: &str) -> bool;

    /// 获取所有已注册的组件描述符
    fn registered_descriptors(&self) -> Vec<ComponentDescriptor>;
}
