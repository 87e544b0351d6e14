//! # 应用上下文实现
//!
//! 提供具体的组件注册表与依赖解析器实现：[`AppContext`] 以及
//! 面向应用代码的类型化门面 [`Resolver`]。

pub mod context;
pub mod resolver;

pub use context::{AppContext, ContextState};
pub use resolver::Resolver;
