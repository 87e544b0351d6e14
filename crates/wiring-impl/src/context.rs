//! 应用上下文：组件注册表与依赖解析器的具体实现

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, info};
use wiring_abstractions::{
    ComponentRegistry, ComponentScanner, DependencyResolver, ResolveContext,
};
use wiring_common::{
    dedup_namespaces, BootstrapResult, Component, ComponentDescriptor, DependencySet, Namespace,
    ResolveError, ResolveResult, ScanError, ScanResult,
};

/// 上下文状态机
///
/// `Uninitialized → Scanning → Ready`，`Ready` 为终态，启动后不再重新扫描。
/// 只有进入 `Ready` 之后才允许解析。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// 尚未初始化
    Uninitialized,
    /// 扫描注册中
    Scanning,
    /// 就绪，可以解析
    Ready,
}

/// 单个组件的注册项
///
/// 描述符注册后不可变；单例格子保证并发首次解析时构造恰好发生一次。
struct Registration {
    descriptor: ComponentDescriptor,
    cell: OnceCell<Arc<dyn Any + Send + Sync>>,
}

/// 应用上下文
///
/// 进程内唯一的组件注册表与解析器。作为显式对象在启动时创建并传递给
/// 需要解析依赖的代码，而不是通过环境全局状态访问，测试可以各自
/// 构造独立实例。
pub struct AppContext {
    state: parking_lot::RwLock<ContextState>,
    registrations: RwLock<HashMap<TypeId, Arc<Registration>>>,
    names: RwLock<HashMap<String, TypeId>>,
}

impl AppContext {
    /// 创建未初始化的上下文
    pub fn new() -> Self {
        Self {
            state: parking_lot::RwLock::new(ContextState::Uninitialized),
            registrations: RwLock::new(HashMap::new()),
            names: RwLock::new(HashMap::new()),
        }
    }

    /// 获取当前状态
    pub fn state(&self) -> ContextState {
        *self.state.read()
    }

    /// 一次性初始化：扫描声明的命名空间并注册全部发现的组件
    ///
    /// 必须在任何解析调用之前完成。任何失败都中止启动，
    /// 上下文停留在非 `Ready` 状态。重复调用返回
    /// [`ScanError::AlreadyInitialized`]。
    pub async fn initialize(
        &self,
        scanner: &dyn ComponentScanner,
        namespaces: &[Namespace],
    ) -> BootstrapResult<()> {
        {
            let mut state = self.state.write();
            if *state != ContextState::Uninitialized {
                return Err(ScanError::AlreadyInitialized.into());
            }
            *state = ContextState::Scanning;
        }

        let namespaces = dedup_namespaces(namespaces);
        if namespaces.is_empty() {
            return Err(ScanError::EmptyNamespaces.into());
        }

        info!(
            "开始扫描命名空间: [{}] (扫描器: {})",
            namespaces
                .iter()
                .map(Namespace::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            scanner.name()
        );

        let descriptors = scanner.scan(&namespaces).await?;
        let count = descriptors.len();
        for descriptor in descriptors {
            ComponentRegistry::register_descriptor(self, descriptor).await?;
        }

        // 声明的依赖缺失在启动期即报错，不等到首次解析
        ComponentRegistry::validate_dependencies(self).await?;

        *self.state.write() = ContextState::Ready;
        info!("容器初始化完成，注册了 {} 个组件", count);
        Ok(())
    }

    /// 解析指定类型的组件单例
    pub async fn resolve<T: Component>(&self) -> ResolveResult<Arc<T>> {
        self.ensure_ready()?;
        let raw = self
            .resolve_chained(TypeId::of::<T>(), ResolveContext::new())
            .await
            .map_err(|err| Self::name_unregistered::<T>(err))?;
        raw.downcast::<T>().map_err(|_| ResolveError::TypeMismatch {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    /// 检查组件是否已注册
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.registrations
            .try_read()
            .map(|registrations| registrations.contains_key(&TypeId::of::<T>()))
            .unwrap_or(false)
    }

    fn ensure_ready(&self) -> ResolveResult<()> {
        if *self.state.read() == ContextState::Ready {
            Ok(())
        } else {
            Err(ResolveError::NotInitialized)
        }
    }

    /// 把按 TypeId 上报的未注册错误改写为可读的类型名
    fn name_unregistered<T>(err: ResolveError) -> ResolveError {
        match err {
            ResolveError::ComponentNotRegistered { .. } => ResolveError::ComponentNotRegistered {
                type_name: std::any::type_name::<T>().to_string(),
            },
            other => other,
        }
    }

    /// 递归解析：先完整解析声明的依赖，再申领单例格子执行构造配方
    ///
    /// 依赖在申领格子之前解析完毕，格子的初始化函数不会等待其他格子，
    /// 并发首次解析同一标识符时由格子串行化，构造恰好发生一次。
    fn resolve_chained(
        &self,
        type_id: TypeId,
        mut ctx: ResolveContext,
    ) -> BoxFuture<'_, ResolveResult<Arc<dyn Any + Send + Sync>>> {
        Box::pin(async move {
            let registration = {
                let registrations = self.registrations.read().await;
                registrations.get(&type_id).cloned()
            };
            let registration =
                registration.ok_or_else(|| ResolveError::ComponentNotRegistered {
                    type_name: format!("{type_id:?}"),
                })?;

            // 解析链重入即循环依赖，在触碰任何格子之前报错
            ctx.push(registration.descriptor.type_info)?;

            if let Some(existing) = registration.cell.get() {
                return Ok(existing.clone());
            }

            let mut deps = DependencySet::new();
            for dependency in &registration.descriptor.dependencies {
                let instance = self.resolve_chained(dependency.id, ctx.clone()).await?;
                deps.insert(dependency.id, instance);
            }

            let descriptor = &registration.descriptor;
            let instance = registration
                .cell
                .get_or_try_init(|| async {
                    debug!(
                        "构造组件: {} (命名空间: {})",
                        descriptor.name, descriptor.namespace
                    );
                    (descriptor.factory)(&deps)
                })
                .await?;
            Ok(instance.clone())
        })
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComponentRegistry for AppContext {
    async fn register_descriptor(&self, descriptor: ComponentDescriptor) -> ScanResult<()> {
        if *self.state.read() == ContextState::Ready {
            return Err(ScanError::AlreadyInitialized);
        }

        let mut registrations = self.registrations.write().await;
        let mut names = self.names.write().await;
        if registrations.contains_key(&descriptor.type_info.id)
            || names.contains_key(&descriptor.name)
        {
            return Err(ScanError::DuplicateRegistration {
                name: descriptor.name.clone(),
                namespace: descriptor.namespace.to_string(),
            });
        }

        debug!(
            "注册组件: {} ({})",
            descriptor.name, descriptor.type_info.name
        );
        names.insert(descriptor.name.clone(), descriptor.type_info.id);
        registrations.insert(
            descriptor.type_info.id,
            Arc::new(Registration {
                descriptor,
                cell: OnceCell::new(),
            }),
        );
        Ok(())
    }

    async fn validate_dependencies(&self) -> ScanResult<()> {
        let registrations = self.registrations.read().await;
        for registration in registrations.values() {
            for dependency in &registration.descriptor.dependencies {
                if !registrations.contains_key(&dependency.id) {
                    return Err(ScanError::UnresolvedDependency {
                        type_name: registration.descriptor.type_info.name.to_string(),
                        dependency: dependency.name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn is_registered_by_type_id(&self, type_id: TypeId) -> bool {
        self.registrations
            .try_read()
            .map(|registrations| registrations.contains_key(&type_id))
            .unwrap_or(false)
    }

    fn is_registered_by_name(&self, name: &str) -> bool {
        self.names
            .try_read()
            .map(|names| names.contains_key(name))
            .unwrap_or(false)
    }

    fn registered_descriptors(&self) -> Vec<ComponentDescriptor> {
        self.registrations
            .try_read()
            .map(|registrations| {
                registrations
                    .values()
                    .map(|registration| registration.descriptor.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl DependencyResolver for AppContext {
    async fn resolve_by_type_id(
        &self,
        type_id: TypeId,
    ) -> ResolveResult<Arc<dyn Any + Send + Sync>> {
        self.ensure_ready()?;
        self.resolve_chained(type_id, ResolveContext::new()).await
    }

    async fn resolve_by_name(&self, name: &str) -> ResolveResult<Arc<dyn Any + Send + Sync>> {
        self.ensure_ready()?;
        let type_id = {
            let names = self.names.read().await;
            names.get(name).copied()
        };
        let type_id = type_id.ok_or_else(|| ResolveError::ComponentNotRegistered {
            type_name: name.to_string(),
        })?;
        self.resolve_chained(type_id, ResolveContext::new()).await
    }

    fn can_resolve_by_type_id(&self, type_id: TypeId) -> bool {
        *self.state.read() == ContextState::Ready
            && ComponentRegistry::is_registered_by_type_id(self, type_id)
    }

    fn can_resolve_by_name(&self, name: &str) -> bool {
        *self.state.read() == ContextState::Ready
            && ComponentRegistry::is_registered_by_name(self, name)
    }
}
