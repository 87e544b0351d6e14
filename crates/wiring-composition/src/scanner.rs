//! 组件扫描器实现
//!
//! 两种发现来源，同一份契约：给定命名空间集合，产出其中的组件描述符，
//! 并在发现重复标识符时以致命错误结束扫描。

use async_trait::async_trait;
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};
use wiring_abstractions::ComponentScanner;
use wiring_common::{
    submitted_descriptors, ComponentDescriptor, Namespace, ScanError, ScanResult,
};

/// 在扫描结果中查找重复标识符（相同类型或相同名称）
fn check_duplicates(descriptors: &[ComponentDescriptor]) -> ScanResult<()> {
    let mut seen_types: HashSet<TypeId> = HashSet::new();
    let mut seen_names: HashMap<&str, &ComponentDescriptor> = HashMap::new();

    for descriptor in descriptors {
        if !seen_types.insert(descriptor.type_info.id)
            || seen_names
                .insert(descriptor.name.as_str(), descriptor)
                .is_some()
        {
            return Err(ScanError::DuplicateRegistration {
                name: descriptor.name.clone(),
                namespace: descriptor.namespace.to_string(),
            });
        }
    }
    Ok(())
}

/// 按命名空间筛选候选描述符
fn filter_by_namespace(
    candidates: Vec<ComponentDescriptor>,
    namespaces: &[Namespace],
) -> Vec<ComponentDescriptor> {
    candidates
        .into_iter()
        .filter(|descriptor| namespaces.contains(&descriptor.namespace))
        .collect()
}

/// 基于编译时提交表的扫描器
///
/// `#[component]` 宏在 main 之前把描述符提交到进程级提交表；
/// 本扫描器从表中筛出声明命名空间内的条目。这是对注解驱动扫描的
/// 无反射替代：注册表在编译期生成，扫描只做筛选和冲突检查。
#[derive(Debug, Default)]
pub struct SubmissionScanner;

impl SubmissionScanner {
    /// 创建新的提交表扫描器
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ComponentScanner for SubmissionScanner {
    async fn scan(&self, namespaces: &[Namespace]) -> ScanResult<Vec<ComponentDescriptor>> {
        let candidates = submitted_descriptors();
        debug!("提交表中共有 {} 个候选组件", candidates.len());

        let discovered = filter_by_namespace(candidates, namespaces);
        check_duplicates(&discovered)?;

        info!("扫描完成，发现 {} 个组件", discovered.len());
        Ok(discovered)
    }

    fn name(&self) -> &str {
        "SubmissionScanner"
    }
}

/// 基于显式描述符列表的扫描器
///
/// 静态检查友好的注册方式：调用方逐条给出构造清单。
/// 测试用它构造独立的上下文，不触碰进程级提交表。
#[derive(Debug, Default)]
pub struct StaticScanner {
    descriptors: Vec<ComponentDescriptor>,
}

impl StaticScanner {
    /// 创建空的静态扫描器
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个描述符
    pub fn with_descriptor(mut self, descriptor: ComponentDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }
}

#[async_trait]
impl ComponentScanner for StaticScanner {
    async fn scan(&self, namespaces: &[Namespace]) -> ScanResult<Vec<ComponentDescriptor>> {
        let discovered = filter_by_namespace(self.descriptors.clone(), namespaces);
        check_duplicates(&discovered)?;

        info!("扫描完成，发现 {} 个组件", discovered.len());
        Ok(discovered)
    }

    fn name(&self) -> &str {
        "StaticScanner"
    }
}
