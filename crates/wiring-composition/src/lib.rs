//! # 装配组合层
//!
//! 把扫描器和应用上下文组合成一条启动路径。
//!
//! ## 核心组件
//!
//! - [`SubmissionScanner`] - 基于编译时提交表的扫描器
//! - [`StaticScanner`] - 基于显式描述符列表的扫描器
//! - [`ContextBootstrapper`] - 启动入口

pub mod bootstrapper;
pub mod scanner;

pub use bootstrapper::ContextBootstrapper;
pub use scanner::{StaticScanner, SubmissionScanner};
