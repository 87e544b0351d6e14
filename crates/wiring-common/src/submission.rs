//! 编译时组件提交表
//!
//! `#[component]` 宏在进程启动时（main 之前）把组件描述符提交到这张
//! 进程级提交表，扫描器随后按命名空间从中筛选。表本身只收集候选，
//! 不做去重，重复标识符由扫描阶段作为致命错误上报。

use crate::component::ComponentDescriptor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

static SUBMITTED_DESCRIPTORS: Lazy<RwLock<Vec<ComponentDescriptor>>> =
    Lazy::new(|| RwLock::new(Vec::new()));

/// 提交一个组件描述符
///
/// 由 `#[component]` 宏生成的注册函数调用，也可以手工调用。
pub fn submit_descriptor(descriptor: ComponentDescriptor) {
    SUBMITTED_DESCRIPTORS.write().push(descriptor);
}

/// 获取当前进程内提交的全部组件描述符
pub fn submitted_descriptors() -> Vec<ComponentDescriptor> {
    SUBMITTED_DESCRIPTORS.read().clone()
}
