//! # 基础设施组合层
//!
//! 这个 crate 是依赖注入容器的组合根，负责把容器配置、日志和组件注册
//! 组合成一个可用的应用容器。
//!
//! ## 主要功能
//!
//! - **容器构建器**: 使用构建者模式组装应用容器
//! - **日志初始化**: 基于 `tracing-subscriber` 的全局日志配置
//! - **编程式配置源**: 测试中以键值对覆盖配置源组件
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use di_abstractions::EntryBuilder;
//! use infrastructure_composition::{ContainerBuilder, LoggingConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let container = ContainerBuilder::new()
//!         .with_logging(LoggingConfig::development())
//!         .register(EntryBuilder::instance("greeting", String::from("hello")))
//!         .build()?;
//!
//!     println!("{:?}", container);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config_sources;

// 重新导出主要类型
pub use builder::{ContainerBuilder, LoggingConfig};
pub use config_sources::{
    set_env_for_tests, set_env_for_tests_with_priority, PROGRAMMATIC_CONFIG_SOURCE,
};

// 重新导出错误类型
pub use infrastructure_common::InfrastructureError;
