//! # Wiring Common
//!
//! 这个 crate 提供 Settlers 服务器组件装配层的公共 traits 和工具。
//!
//! ## 核心组件
//!
//! - [`Component`] - 组件基础 trait
//! - [`Registerable`] - 可注册组件 trait（声明依赖和构造配方）
//! - [`ComponentDescriptor`] - 组件描述符
//! - [`Namespace`] - 扫描命名空间
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 编译时组件注册，不依赖运行时反射
//! - 单例语义：每个标识符在进程生命周期内至多一个实例

pub mod component;
pub mod errors;
pub mod metadata;
pub mod namespace;
pub mod submission;

pub use component::*;
pub use errors::*;
pub use metadata::*;
pub use namespace::*;
pub use submission::*;
