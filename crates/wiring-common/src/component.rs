//! 组件基础接口定义
//!
//! 提供所有可装配组件必须实现的基础 trait 以及组件描述符。

use crate::errors::{ResolveError, ResolveResult};
use crate::metadata::TypeInfo;
use crate::namespace::Namespace;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// 组件基础 trait
///
/// 所有参与依赖装配的组件都必须实现此 trait。
pub trait Component: Send + Sync + Debug + 'static {
    /// 组件逻辑名称
    fn name(&self) -> &'static str;

    /// 组件所属命名空间
    fn namespace(&self) -> Namespace;
}

/// 已解析依赖集合
///
/// 按类型ID索引的依赖实例集合，在构造配方执行前由容器填充完毕。
#[derive(Default)]
pub struct DependencySet {
    instances: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl DependencySet {
    /// 创建空的依赖集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 放入一个已解析的依赖实例
    pub fn insert(&mut self, type_id: TypeId, instance: Arc<dyn Any + Send + Sync>) {
        self.instances.insert(type_id, instance);
    }

    /// 取出指定类型的依赖实例
    pub fn get<T: Send + Sync + 'static>(&self) -> ResolveResult<Arc<T>> {
        let instance = self.instances.get(&TypeId::of::<T>()).ok_or_else(|| {
            ResolveError::ComponentNotRegistered {
                type_name: std::any::type_name::<T>().to_string(),
            }
        })?;
        instance
            .clone()
            .downcast::<T>()
            .map_err(|_| ResolveError::TypeMismatch {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    /// 依赖数量
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// 可注册组件 trait
///
/// 声明组件的依赖列表和构造配方。构造配方只通过 [`DependencySet`]
/// 获取依赖，不得自行构造，以保证单实例语义。
pub trait Registerable: Send + Sync + Sized + 'static {
    /// 获取声明的依赖类型列表
    fn dependencies() -> Vec<TypeInfo> {
        Vec::new()
    }

    /// 使用已解析的依赖构造组件实例
    fn assemble(deps: &DependencySet) -> ResolveResult<Self>;
}

/// 组件工厂函数类型
pub type ComponentFactoryFn =
    Arc<dyn Fn(&DependencySet) -> ResolveResult<Arc<dyn Any + Send + Sync>> + Send + Sync>;

/// 组件描述符
///
/// 标识一个可注册单元：逻辑名称、所属命名空间以及构造配方。
/// 在扫描阶段创建，注册后不可变。
#[derive(Clone)]
pub struct ComponentDescriptor {
    /// 组件逻辑名称
    pub name: String,
    /// 所属命名空间
    pub namespace: Namespace,
    /// 类型信息
    pub type_info: TypeInfo,
    /// 声明的依赖列表
    pub dependencies: Vec<TypeInfo>,
    /// 构造配方
    pub factory: ComponentFactoryFn,
}

impl ComponentDescriptor {
    /// 为可注册组件创建描述符
    pub fn of<T: Registerable>(name: impl Into<String>, namespace: Namespace) -> Self {
        Self {
            name: name.into(),
            namespace,
            type_info: TypeInfo::of::<T>(),
            dependencies: T::dependencies(),
            factory: Arc::new(|deps| {
                T::assemble(deps).map(|component| Arc::new(component) as Arc<dyn Any + Send + Sync>)
            }),
        }
    }
}

impl Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("type_info", &self.type_info)
            .field("dependencies", &self.dependencies)
            .field("factory", &"<factory>")
            .finish()
    }
}
