//! # Component Macros
//!
//! 这个 crate 提供编译时生成注入目标描述的过程宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`] - 为具名字段结构体实现 `di_abstractions::Injectable`
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::Injectable;
//! use di_impl::ApplicationContainer;
//! use infrastructure_common::ConfigSource;
//! use std::sync::Arc;
//!
//! #[derive(Injectable)]
//! struct Deps {
//!     #[inject("ApplicationContainer")]
//!     container: Arc<ApplicationContainer>,
//!     #[inject(key = "ConfigSources")]
//!     sources: Vec<Arc<dyn ConfigSource>>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

// Re-exports are not allowed in proc-macro crates

/// 注入目标派生宏
///
/// 每个字段对应一次依赖查找，基数由字段类型决定：
///
/// - `Arc<X>` - 单个组件
/// - `Vec<Arc<X>>` - 按注册顺序的集合
/// - `HashMap<String, Arc<X>>` / `BTreeMap<String, Arc<X>>` - 按主名称的集合
///
/// 查找键默认取字段标识符，可通过 `#[inject("Key")]` 或
/// `#[inject(key = "Key")]` 覆盖。枚举、联合体和元组结构体会在编译期报错。
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
