//! # Wiring Macros
//!
//! 这个 crate 提供用于编译时组件注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`component`] - 组件注册宏
//!
//! ## 使用示例
//!
//! ```ignore
//! use wiring_common::{DependencySet, Registerable, ResolveResult};
//! use wiring_macros::component;
//!
//! #[component(namespace = "services")]
//! #[derive(Debug)]
//! pub struct GameService;
//!
//! impl Registerable for GameService {
//!     fn assemble(_deps: &DependencySet) -> ResolveResult<Self> {
//!         Ok(Self)
//!     }
//! }
//! ```

use proc_macro::TokenStream;

mod component;

/// 组件注册宏
///
/// 为结构体实现 `Component` trait，并生成在进程启动时把组件描述符
/// 提交到全局提交表的注册函数。结构体需要自行实现 `Registerable`
/// 来声明依赖和构造配方。
///
/// # 参数
///
/// - `namespace = "services"` - 所属命名空间（必填）
/// - `name = "custom_name"` - 自定义组件名称（默认为结构体名）
///
/// # 示例
///
/// ```ignore
/// #[component(namespace = "controllers", name = "GameController")]
/// pub struct GameController {
///     // 字段
/// }
/// ```
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(args, input)
}
