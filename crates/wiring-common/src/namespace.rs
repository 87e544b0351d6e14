//! 扫描命名空间定义

use std::fmt;

/// 组件命名空间
///
/// 限定扫描器的发现范围：只有声明在已登记命名空间内的组件才会被自动注册。
/// 命名空间在定义期固定，不支持运行时配置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namespace(pub &'static str);

impl Namespace {
    /// 获取命名空间的字符串表示
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// 去重命名空间列表，保持声明顺序
///
/// 同一命名空间重复声明不会导致组件被二次注册。
pub fn dedup_namespaces(namespaces: &[Namespace]) -> Vec<Namespace> {
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::with_capacity(namespaces.len());
    for ns in namespaces {
        if seen.insert(*ns) {
            result.push(*ns);
        } else {
            tracing::warn!("命名空间重复声明，已忽略: {}", ns);
        }
    }
    result
}
