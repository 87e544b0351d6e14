//! 组件注册宏实现

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, Expr, Ident,
    ItemStruct, Lit, Meta, Result, Token,
};

/// 组件配置参数
#[derive(Debug, Clone, Default)]
pub struct ComponentArgs {
    /// 所属命名空间
    pub namespace: Option<String>,
    /// 自定义组件名称
    pub name: Option<String>,
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = ComponentArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            if let Meta::NameValue(nv) = meta {
                if nv.path.is_ident("namespace") {
                    if let Expr::Lit(expr_lit) = nv.value {
                        if let Lit::Str(lit_str) = expr_lit.lit {
                            args.namespace = Some(lit_str.value());
                        }
                    }
                } else if nv.path.is_ident("name") {
                    if let Expr::Lit(expr_lit) = nv.value {
                        if let Lit::Str(lit_str) = expr_lit.lit {
                            args.name = Some(lit_str.value());
                        }
                    }
                }
            }
        }

        Ok(args)
    }
}

/// 实现 #[component] 宏
pub fn component_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let component_args = match syn::parse::<ComponentArgs>(args) {
        Ok(args) => args,
        Err(e) => return e.to_compile_error().into(),
    };

    let input_struct = parse_macro_input!(input as ItemStruct);
    let struct_name = &input_struct.ident;

    let namespace = match component_args.namespace {
        Some(namespace) => namespace,
        None => {
            return syn::Error::new_spanned(
                struct_name,
                "#[component] 需要声明命名空间，例如 #[component(namespace = \"services\")]",
            )
            .to_compile_error()
            .into();
        }
    };

    let struct_name_string = struct_name.to_string();
    let component_name = component_args.name.as_deref().unwrap_or(&struct_name_string);

    let component_trait_impl = quote! {
        impl wiring_common::Component for #struct_name {
            fn name(&self) -> &'static str {
                #component_name
            }

            fn namespace(&self) -> wiring_common::Namespace {
                wiring_common::Namespace(#namespace)
            }
        }
    };

    let submission_code = generate_submission_code(struct_name, component_name, &namespace);

    let expanded = quote! {
        #input_struct

        #component_trait_impl

        #submission_code
    };

    TokenStream::from(expanded)
}

/// 生成组件提交代码
///
/// 使用 ctor 在 main 之前把描述符提交到全局提交表，扫描器随后按
/// 命名空间筛选。依赖列表和构造配方来自组件的 `Registerable` 实现。
fn generate_submission_code(
    struct_name: &Ident,
    component_name: &str,
    namespace: &str,
) -> proc_macro2::TokenStream {
    let submission_fn_name = Ident::new(
        &format!(
            "__submit_component_{}",
            struct_name.to_string().to_lowercase()
        ),
        Span::call_site(),
    );

    quote! {
        #[ctor::ctor]
        fn #submission_fn_name() {
            wiring_common::submit_descriptor(wiring_common::ComponentDescriptor::of::<#struct_name>(
                #component_name,
                wiring_common::Namespace(#namespace),
            ));
        }
    }
}
