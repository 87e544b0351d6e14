//! # Wiring Abstractions
//!
//! 组件装配抽象层，定义组件扫描、注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`ComponentRegistry`] - 组件注册表接口
//! - [`DependencyResolver`] - 依赖解析器接口

pub mod registry;
pub mod resolver;
pub mod scanner;

pub use registry::*;
pub use resolver::*;
pub use scanner::*;
