//! 装配核心的集成测试：扫描、注册、解析与并发单例语义
use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiring_abstractions::DependencyResolver;
use wiring_common::{
    BootstrapError, Component, ComponentDescriptor, DependencySet, Namespace, Registerable,
    ResolveError, ResolveResult, ScanError, TypeInfo,
};
use wiring_composition::StaticScanner;
use wiring_impl::{AppContext, ContextState};

/// 测试组件：无依赖的叶子服务
#[derive(Debug)]
struct DiceService;

impl Component for DiceService {
    fn name(&self) -> &'static str {
        "DiceService"
    }
    fn namespace(&self) -> Namespace {
        Namespace("services")
    }
}

impl Registerable for DiceService {
    fn assemble(_deps: &DependencySet) -> ResolveResult<Self> {
        Ok(Self)
    }
}

/// 测试组件：依赖 DiceService
#[derive(Debug)]
struct BoardService {
    dice: Arc<DiceService>,
}

impl Component for BoardService {
    fn name(&self) -> &'static str {
        "BoardService"
    }
    fn namespace(&self) -> Namespace {
        Namespace("services")
    }
}

impl Registerable for BoardService {
    fn dependencies() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<DiceService>()]
    }

    fn assemble(deps: &DependencySet) -> ResolveResult<Self> {
        Ok(Self {
            dice: deps.get::<DiceService>()?,
        })
    }
}

fn services_scanner() -> StaticScanner {
    StaticScanner::new()
        .with_descriptor(ComponentDescriptor::of::<DiceService>(
            "DiceService",
            Namespace("services"),
        ))
        .with_descriptor(ComponentDescriptor::of::<BoardService>(
            "BoardService",
            Namespace("services"),
        ))
}

#[tokio::test]
async fn test_initialize_reaches_ready_and_resolves_graph() {
    let context = AppContext::new();
    context
        .initialize(&services_scanner(), &[Namespace("services")])
        .await
        .unwrap();
    assert_eq!(context.state(), ContextState::Ready);

    let board = context.resolve::<BoardService>().await.unwrap();
    let dice = context.resolve::<DiceService>().await.unwrap();
    // 依赖注入得到的实例与直接解析得到的是同一个单例
    assert!(Arc::ptr_eq(&board.dice, &dice));
}

#[tokio::test]
async fn test_resolve_twice_returns_identical_instance() {
    let context = AppContext::new();
    context
        .initialize(&services_scanner(), &[Namespace("services")])
        .await
        .unwrap();

    let first = context.resolve::<DiceService>().await.unwrap();
    let second = context.resolve::<DiceService>().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_resolution_through_trait_object() {
    let context = AppContext::new();
    context
        .initialize(&services_scanner(), &[Namespace("services")])
        .await
        .unwrap();

    // 对象安全的解析接口与类型化入口指向同一个单例
    let resolver: &dyn DependencyResolver = &context;
    assert!(resolver.can_resolve_by_type_id(TypeId::of::<DiceService>()));
    assert!(resolver.can_resolve_by_name("DiceService"));

    let by_name = resolver
        .resolve_by_name("DiceService")
        .await
        .unwrap()
        .downcast::<DiceService>()
        .ok()
        .unwrap();
    let typed = context.resolve::<DiceService>().await.unwrap();
    assert!(Arc::ptr_eq(&typed, &by_name));
}

#[tokio::test]
async fn test_duplicate_identifier_aborts_startup() {
    let scanner = services_scanner().with_descriptor(ComponentDescriptor::of::<DiceService>(
        "DiceService",
        Namespace("services"),
    ));

    let context = AppContext::new();
    let err = context
        .initialize(&scanner, &[Namespace("services")])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BootstrapError::ScanError {
            source: ScanError::DuplicateRegistration { .. }
        }
    ));
    assert_ne!(context.state(), ContextState::Ready);
}

/// 测试组件：声明了一个不在任何扫描范围内的依赖
#[derive(Debug)]
struct OrphanService;

impl Component for OrphanService {
    fn name(&self) -> &'static str {
        "OrphanService"
    }
    fn namespace(&self) -> Namespace {
        Namespace("services")
    }
}

impl Registerable for OrphanService {
    fn dependencies() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<BoardService>()]
    }

    fn assemble(deps: &DependencySet) -> ResolveResult<Self> {
        deps.get::<BoardService>()?;
        Ok(Self)
    }
}

#[tokio::test]
async fn test_unresolved_dependency_aborts_startup() {
    let scanner = StaticScanner::new().with_descriptor(ComponentDescriptor::of::<OrphanService>(
        "OrphanService",
        Namespace("services"),
    ));

    let context = AppContext::new();
    let err = context
        .initialize(&scanner, &[Namespace("services")])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BootstrapError::ScanError {
            source: ScanError::UnresolvedDependency { .. }
        }
    ));
}

#[tokio::test]
async fn test_components_outside_declared_namespaces_are_invisible() {
    // OrphanService 声明在 admin 命名空间，而只有 services 被登记扫描
    let scanner = services_scanner().with_descriptor(ComponentDescriptor::of::<OrphanService>(
        "OrphanService",
        Namespace("admin"),
    ));

    let context = AppContext::new();
    context
        .initialize(&scanner, &[Namespace("services")])
        .await
        .unwrap();

    assert!(!context.is_registered::<OrphanService>());
    let err = context.resolve::<OrphanService>().await.unwrap_err();
    assert!(matches!(err, ResolveError::ComponentNotRegistered { .. }));
}

/// 循环依赖测试组件：TradeState 与 TurnState 互相依赖
#[derive(Debug)]
struct TradeState {
    #[allow(dead_code)]
    turn: Arc<TurnState>,
}

#[derive(Debug)]
struct TurnState {
    #[allow(dead_code)]
    trade: Arc<TradeState>,
}

impl Component for TradeState {
    fn name(&self) -> &'static str {
        "TradeState"
    }
    fn namespace(&self) -> Namespace {
        Namespace("services")
    }
}

impl Component for TurnState {
    fn name(&self) -> &'static str {
        "TurnState"
    }
    fn namespace(&self) -> Namespace {
        Namespace("services")
    }
}

impl Registerable for TradeState {
    fn dependencies() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<TurnState>()]
    }

    fn assemble(deps: &DependencySet) -> ResolveResult<Self> {
        Ok(Self {
            turn: deps.get::<TurnState>()?,
        })
    }
}

impl Registerable for TurnState {
    fn dependencies() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<TradeState>()]
    }

    fn assemble(deps: &DependencySet) -> ResolveResult<Self> {
        Ok(Self {
            trade: deps.get::<TradeState>()?,
        })
    }
}

#[tokio::test]
async fn test_dependency_cycle_fails_on_first_resolution() {
    let scanner = services_scanner()
        .with_descriptor(ComponentDescriptor::of::<TradeState>(
            "TradeState",
            Namespace("services"),
        ))
        .with_descriptor(ComponentDescriptor::of::<TurnState>(
            "TurnState",
            Namespace("services"),
        ));

    let context = AppContext::new();
    context
        .initialize(&scanner, &[Namespace("services")])
        .await
        .unwrap();

    // 触碰环上任一标识符都在解析时报错，并带出完整链路
    let err = context.resolve::<TradeState>().await.unwrap_err();
    match err {
        ResolveError::DependencyCycle { dependency_chain } => {
            assert_eq!(dependency_chain, "TradeState -> TurnState -> TradeState");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // 环之外已注册的组件不受影响，进程继续可用
    assert!(context.resolve::<DiceService>().await.is_ok());
}

/// 并发测试组件：统计构造配方被执行的次数
#[derive(Debug)]
struct CountingService;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

impl Component for CountingService {
    fn name(&self) -> &'static str {
        "CountingService"
    }
    fn namespace(&self) -> Namespace {
        Namespace("services")
    }
}

impl Registerable for CountingService {
    fn assemble(_deps: &DependencySet) -> ResolveResult<Self> {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        Ok(Self)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_first_resolution_constructs_exactly_once() {
    let scanner = StaticScanner::new().with_descriptor(ComponentDescriptor::of::<CountingService>(
        "CountingService",
        Namespace("services"),
    ));

    let context = Arc::new(AppContext::new());
    context
        .initialize(&scanner, &[Namespace("services")])
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let context = Arc::clone(&context);
        handles.push(tokio::spawn(async move {
            context.resolve::<CountingService>().await.unwrap()
        }));
    }

    let mut instances = Vec::new();
    for handle in handles {
        instances.push(handle.await.unwrap());
    }

    assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    for instance in &instances[1..] {
        assert!(Arc::ptr_eq(&instances[0], instance));
    }
}
