//! 组件扫描器抽象接口
//!
//! 扫描是一次性的启动步骤：给定命名空间集合，产出其中发现的组件描述符。

use async_trait::async_trait;
use wiring_common::{ComponentDescriptor, Namespace, ScanResult};

/// 组件扫描器 trait
///
/// 发现范围严格限制在传入的命名空间内，范围之外的组件永远不会被
/// 自动注册。两个被发现的组件声明相同标识符时，扫描以致命错误结束，
/// 而不是静默覆盖。
#[async_trait]
pub trait ComponentScanner: Send + Sync {
    /// 扫描指定命名空间中的组件
    async fn scan(&self, namespaces: &[Namespace]) -> ScanResult<Vec<ComponentDescriptor>>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}
