//! 错误类型定义

use thiserror::Error;

/// 组件构造函数可返回的通用错误类型
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未找到: {key} (期望类型 {type_name})")]
    MissingComponent { key: String, type_name: String },

    #[error("组件不唯一: {key} (期望类型 {type_name}), 候选: {candidates:?}")]
    AmbiguousComponent {
        key: String,
        type_name: String,
        candidates: Vec<String>,
    },

    #[error("无效的注入目标: {target}, 原因: {message}")]
    InvalidInjectionTarget { target: String, message: String },

    #[error("组件创建失败: {name} (查找键 {key}), 原因: {source}")]
    ComponentCreationFailed {
        key: String,
        name: String,
        source: BoxError,
    },
}

impl DependencyError {
    /// 创建组件缺失错误
    pub fn missing(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::MissingComponent {
            key: key.into(),
            type_name: type_name.into(),
        }
    }

    /// 创建组件不唯一错误
    pub fn ambiguous(
        key: impl Into<String>,
        type_name: impl Into<String>,
        candidates: Vec<String>,
    ) -> Self {
        Self::AmbiguousComponent {
            key: key.into(),
            type_name: type_name.into(),
            candidates,
        }
    }

    /// 创建无效注入目标错误
    pub fn invalid_target(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInjectionTarget {
            target: target.into(),
            message: message.into(),
        }
    }

    /// 查找键（若错误与某个键相关）
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingComponent { key, .. }
            | Self::AmbiguousComponent { key, .. }
            | Self::ComponentCreationFailed { key, .. } => Some(key),
            Self::InvalidInjectionTarget { .. } => None,
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("容器配置解析失败: {source}")]
    ConfigParseError {
        #[from]
        source: serde_json::Error,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
