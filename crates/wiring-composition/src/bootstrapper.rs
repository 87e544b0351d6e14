//! 装配启动器
//!
//! 进程启动时调用一次的统一入口：扫描声明的命名空间、填充上下文，
//! 完成（或致命失败）之后系统的其余部分才允许发起解析。

use crate::scanner::SubmissionScanner;
use std::sync::Arc;
use tracing::info;
use wiring_abstractions::ComponentScanner;
use wiring_common::{BootstrapResult, Namespace};
use wiring_impl::{AppContext, Resolver};

/// 上下文启动器
///
/// 负责协调扫描与注册的启动顺序，产出就绪的 [`AppContext`]。
pub struct ContextBootstrapper {
    scanner: Box<dyn ComponentScanner>,
    namespaces: Vec<Namespace>,
}

impl ContextBootstrapper {
    /// 创建新的启动器，默认使用编译时提交表扫描器
    pub fn new() -> Self {
        Self {
            scanner: Box::new(SubmissionScanner::new()),
            namespaces: Vec::new(),
        }
    }

    /// 替换扫描器
    pub fn with_scanner(mut self, scanner: Box<dyn ComponentScanner>) -> Self {
        self.scanner = scanner;
        self
    }

    /// 登记一个扫描命名空间
    pub fn add_namespace(mut self, namespace: Namespace) -> Self {
        self.namespaces.push(namespace);
        self
    }

    /// 启动装配，返回就绪的上下文
    pub async fn bootstrap(self) -> BootstrapResult<Arc<AppContext>> {
        info!("开始启动组件装配");

        let context = Arc::new(AppContext::new());
        context
            .initialize(self.scanner.as_ref(), &self.namespaces)
            .await?;

        info!("组件装配启动完成");
        Ok(context)
    }

    /// 启动装配并直接返回类型化门面
    pub async fn bootstrap_resolver(self) -> BootstrapResult<Resolver> {
        let context = self.bootstrap().await?;
        Ok(Resolver::new(context))
    }
}

impl Default for ContextBootstrapper {
    fn default() -> Self {
        Self::new()
    }
}
