//! # Infrastructure Common
//!
//! 这个 crate 提供了 Lorn IOC 容器各层共享的基础类型。
//!
//! ## 核心内容
//!
//! - [`DependencyError`] - 依赖解析错误分类
//! - [`TypeInfo`] / [`Cardinality`] - 组件类型与注入字段元数据
//! - [`ConfigSource`] - 以组件形式注册的配置源约定

pub mod configuration;
pub mod errors;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use metadata::*;
