//! # 依赖注入具体实现
//!
//! 提供分层注册表、快照解析器、注入器和应用容器的具体实现。
//!
//! ```rust
//! use di_abstractions::{ComponentResolver, DiContainer, InjectField, Injectable, InjectionField};
//! use di_impl::ApplicationContainer;
//! use infrastructure_common::DependencyResult;
//! use std::sync::Arc;
//!
//! struct Greeting {
//!     text: Arc<String>,
//! }
//!
//! impl Injectable for Greeting {
//!     fn fields() -> Vec<InjectionField> {
//!         vec![InjectionField::of::<Arc<String>>("text", "text")]
//!     }
//!
//!     fn inject<R: ComponentResolver>(resolver: &R) -> DependencyResult<Self> {
//!         Ok(Self { text: InjectField::resolve_field(resolver, "text")? })
//!     }
//! }
//!
//! let container = ApplicationContainer::new();
//! container.put_factory(|| Some(String::from("hello")), "text", &[]);
//!
//! let text = container.call_injected(|greeting: Greeting| greeting.text.len()).unwrap();
//! assert_eq!(text, 5);
//! ```

pub mod container;
pub mod injector;
pub mod registry;
pub mod resolver;

pub use container::ApplicationContainer;
pub use injector::Injector;
pub use registry::LayeredRegistry;
pub use resolver::SnapshotResolver;
