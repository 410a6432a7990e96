//! 配置源组件约定
//!
//! 配置源以普通组件的形式注册到容器中，统一挂在 [`CONFIG_SOURCES_TAG`]
//! 分组下。容器只负责按注册顺序把它们注入出来，解析和合并由下游完成。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 所有配置源共享的分组标签
pub const CONFIG_SOURCES_TAG: &str = "ConfigSources";

/// 环境变量配置源优先级
pub const CONFIG_SOURCE_PRIORITY_ENV: i32 = 100;
/// properties 文件配置源优先级
pub const CONFIG_SOURCE_PRIORITY_FILE_PROPERTIES: i32 = 200;
/// TOML 文件配置源优先级
pub const CONFIG_SOURCE_PRIORITY_FILE_TOML: i32 = 210;
/// 命令行参数配置源优先级
pub const CONFIG_SOURCE_PRIORITY_ARGS: i32 = 300;
/// 测试期间以编程方式设置的配置源优先级
pub const CONFIG_SOURCE_PRIORITY_TESTS: i32 = 1000;

/// 配置源 trait
///
/// 提供一组带优先级的键值对，数值越大优先级越高
pub trait ConfigSource: Send + Sync {
    /// 配置源优先级
    fn priority(&self) -> i32;

    /// 配置键值对
    fn env(&self) -> &HashMap<String, String>;
}

/// 简单配置源
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleConfigSource {
    /// 优先级
    pub priority: i32,
    /// 键值对
    pub env: HashMap<String, String>,
}

impl SimpleConfigSource {
    /// 创建新的配置源
    pub fn new(priority: i32, env: HashMap<String, String>) -> Self {
        Self { priority, env }
    }
}

impl ConfigSource for SimpleConfigSource {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn env(&self) -> &HashMap<String, String> {
        &self.env
    }
}
