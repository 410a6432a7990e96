//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件注册、依赖解析和注入目标的核心接口。
//!
//! ## 核心接口
//!
//! - [`Entry`] / [`EntryBuilder`] - 组件注册条目
//! - [`ComponentRegistry`] - 分层组件注册表接口
//! - [`ComponentResolver`] - 依赖解析器接口
//! - [`Injectable`] / [`InjectField`] - 注入目标描述
//! - [`DiContainer`] - 容器门面接口

pub mod container;
pub mod factory;
pub mod injection;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use factory::*;
pub use injection::*;
pub use registry::*;
pub use resolver::*;

// 派生宏生成的代码只依赖本 crate
pub use infrastructure_common::{Cardinality, DependencyError, DependencyResult, TypeInfo};
