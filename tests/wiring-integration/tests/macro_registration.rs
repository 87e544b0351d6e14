//! `#[component]` 宏到启动器的端到端测试
//!
//! 本测试二进制内通过宏声明 services / controllers 两个命名空间的组件，
//! 由编译时提交表扫描器完成发现，与演示服务器的启动路径一致。

use std::sync::Arc;
use wiring_common::{
    DependencySet, Namespace, Registerable, ResolveError, ResolveResult, TypeInfo,
};
use wiring_composition::ContextBootstrapper;
use wiring_impl::{AppContext, Resolver};
use wiring_macros::component;

#[component(namespace = "services")]
#[derive(Debug)]
struct BankService;

impl BankService {
    fn reserves(&self) -> u32 {
        19
    }
}

impl Registerable for BankService {
    fn assemble(_deps: &DependencySet) -> ResolveResult<Self> {
        Ok(Self)
    }
}

#[component(namespace = "controllers")]
#[derive(Debug)]
struct TradeController {
    bank: Arc<BankService>,
}

impl TradeController {
    fn handle_reserves(&self) -> u32 {
        self.bank.reserves()
    }
}

impl Registerable for TradeController {
    fn dependencies() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<BankService>()]
    }

    fn assemble(deps: &DependencySet) -> ResolveResult<Self> {
        Ok(Self {
            bank: deps.get::<BankService>()?,
        })
    }
}

#[tokio::test]
async fn test_macro_submitted_components_are_wired() {
    let resolver = ContextBootstrapper::new()
        .add_namespace(Namespace("services"))
        .add_namespace(Namespace("controllers"))
        .bootstrap_resolver()
        .await
        .unwrap();

    assert!(resolver.can_get::<BankService>());
    assert!(resolver.can_get::<TradeController>());

    let controller = resolver.get::<TradeController>().await.unwrap();
    assert_eq!(controller.handle_reserves(), 19);

    // 通过类型和通过名称解析得到同一个单例
    let by_name = resolver.get_by_name::<BankService>("BankService").await.unwrap();
    assert!(Arc::ptr_eq(&controller.bank, &by_name));
}

#[tokio::test]
async fn test_facade_before_initialize_reports_not_initialized() {
    let context = Arc::new(AppContext::new());
    let resolver = Resolver::new(context);

    assert!(!resolver.can_get::<BankService>());
    let err = resolver.get::<BankService>().await.unwrap_err();
    assert!(matches!(err, ResolveError::NotInitialized));
}
