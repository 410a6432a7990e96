//! 依赖注入容器抽象接口
//!
//! 提供依赖注入容器的核心抽象

use crate::factory::Entry;
use crate::injection::Injectable;
use infrastructure_common::DependencyResult;
use serde::{Deserialize, Serialize};

/// 容器注册自身时使用的默认名称
pub const APPLICATION_CONTAINER: &str = "ApplicationContainer";

/// 依赖注入容器 trait
///
/// 容器有两种状态：仅核心层，以及存在测试层的覆盖状态。所有操作在两种状态下都有效。
pub trait DiContainer: Send + Sync {
    /// 注册核心条目
    fn put(&self, entry: Entry);

    /// 注册测试覆盖条目
    fn test_put(&self, entry: Entry);

    /// 清除全部测试覆盖，恢复仅核心层的解析
    fn clear_tests(&self);

    /// 是否处于测试覆盖状态
    fn is_overridden(&self) -> bool;

    /// 解析注入目标的全部字段后调用 `procedure`
    ///
    /// 任一字段解析失败时返回该错误，`procedure` 不会被调用。
    fn call_injected<S, R, F>(&self, procedure: F) -> DependencyResult<R>
    where
        S: Injectable,
        F: FnOnce(S) -> R;
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 容器注册自身时使用的名称
    pub self_name: String,
    /// 键控集合中出现重复主名称时是否输出警告
    pub warn_on_duplicate_keys: bool,
}

impl ContainerConfig {
    /// 从 JSON 文本加载配置，缺失的字段取默认值
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 设置自身注册名称
    pub fn with_self_name(mut self, name: impl Into<String>) -> Self {
        self.self_name = name.into();
        self
    }

    /// 设置重复键警告
    pub fn with_duplicate_key_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_duplicate_keys = enabled;
        self
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            self_name: APPLICATION_CONTAINER.to_string(),
            warn_on_duplicate_keys: true,
        }
    }
}
