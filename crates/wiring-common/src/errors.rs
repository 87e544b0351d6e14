//! 错误类型定义

use thiserror::Error;

/// 扫描与注册错误类型
///
/// 所有变体在启动阶段都是致命的：注册失败即中止启动，不存在部分可用模式。
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("重复注册组件: {name} (命名空间: {namespace})")]
    DuplicateRegistration { name: String, namespace: String },

    #[error("扫描命名空间列表为空")]
    EmptyNamespaces,

    #[error("依赖未注册: {type_name} 依赖 {dependency}")]
    UnresolvedDependency {
        type_name: String,
        dependency: String,
    },

    #[error("容器已完成初始化，禁止重复扫描")]
    AlreadyInitialized,
}

/// 依赖解析错误类型
///
/// 解析阶段的错误只对当前调用路径致命，已构造的单例不受影响。
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("容器尚未初始化")]
    NotInitialized,

    #[error("组件未注册: {type_name}")]
    ComponentNotRegistered { type_name: String },

    #[error("检测到循环依赖: {dependency_chain}")]
    DependencyCycle { dependency_chain: String },

    #[error("组件类型不匹配: {type_name}")]
    TypeMismatch { type_name: String },

    #[error("组件创建失败: {type_name}, 原因: {source}")]
    ConstructionFailed {
        type_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 启动错误类型
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("组件扫描失败: {source}")]
    ScanError {
        #[from]
        source: ScanError,
    },

    #[error("依赖解析失败: {source}")]
    ResolveError {
        #[from]
        source: ResolveError,
    },

    #[error("装配启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ScanResult<T> = Result<T, ScanError>;
pub type ResolveResult<T> = Result<T, ResolveError>;
pub type BootstrapResult<T> = Result<T, BootstrapError>;
