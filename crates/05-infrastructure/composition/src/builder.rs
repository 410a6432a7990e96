//! 容器构建器

use di_abstractions::{ContainerConfig, DiContainer, Entry};
use di_impl::ApplicationContainer;
use infrastructure_common::{InfrastructureError, InfrastructureResult};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// 容器构建器
///
/// 使用建造者模式组装应用容器：加载容器配置、初始化日志，再按顺序注册条目
pub struct ContainerBuilder {
    /// 容器配置
    config: ContainerConfig,
    /// 核心条目
    entries: Vec<Entry>,
    /// 测试覆盖条目
    test_entries: Vec<Entry>,
    /// 是否启用日志初始化
    logging_enabled: bool,
    /// 日志配置
    logging_config: LoggingConfig,
}

impl ContainerBuilder {
    /// 创建新的容器构建器
    pub fn new() -> Self {
        Self {
            config: ContainerConfig::default(),
            entries: Vec::new(),
            test_entries: Vec::new(),
            logging_enabled: false, // 默认不启用日志初始化
            logging_config: LoggingConfig::default(),
        }
    }

    /// 使用指定的容器配置
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// 从 JSON 文本加载容器配置
    pub fn with_config_json(mut self, json: &str) -> InfrastructureResult<Self> {
        self.config = ContainerConfig::from_json(json)?;
        info!("加载容器配置: 自身名称 {}", self.config.self_name);
        Ok(self)
    }

    /// 添加核心条目
    pub fn register(mut self, entry: impl Into<Entry>) -> Self {
        let entry = entry.into();
        debug!("预注册核心组件: {}", entry.primary_name());
        self.entries.push(entry);
        self
    }

    /// 添加测试覆盖条目
    pub fn register_test(mut self, entry: impl Into<Entry>) -> Self {
        let entry = entry.into();
        debug!("预注册测试组件: {}", entry.primary_name());
        self.test_entries.push(entry);
        self
    }

    /// 配置日志
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging_config = config;
        self.logging_enabled = true; // 启用日志初始化
        self
    }

    /// 构建应用容器
    pub fn build(self) -> InfrastructureResult<Arc<ApplicationContainer>> {
        // 只有在明确配置了日志时才初始化日志
        // 避免在测试环境中重复初始化
        if self.logging_enabled {
            self.logging_config.initialize()?;
        }

        info!("开始构建应用容器");
        let container = ApplicationContainer::with_config(self.config);

        let core_count = self.entries.len();
        for entry in self.entries {
            container.put(entry);
        }

        let test_count = self.test_entries.len();
        for entry in self.test_entries {
            container.test_put(entry);
        }

        info!(
            "应用容器构建完成: {} 个核心组件, {} 个测试组件",
            core_count, test_count
        );
        Ok(container)
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别，`RUST_LOG` 未设置时生效
    pub level: tracing::Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 创建开发环境日志配置
    pub fn development() -> Self {
        Self {
            level: tracing::Level::DEBUG,
            show_target: true,
            show_thread_ids: true,
            show_file: true,
            show_line_number: true,
            json_format: false,
        }
    }

    /// 创建生产环境日志配置
    pub fn production() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: false,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: true,
        }
    }

    /// 日志过滤器：优先读取 `RUST_LOG`，否则使用配置的级别
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.level).into())
            .from_env_lossy()
    }

    /// 初始化全局日志订阅者
    ///
    /// 全局订阅者只能设置一次，重复初始化返回 `BootstrapFailed`。
    pub fn initialize(&self) -> InfrastructureResult<()> {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_target(self.show_target)
            .with_thread_ids(self.show_thread_ids)
            .with_file(self.show_file)
            .with_line_number(self.show_line_number);

        if self.json_format {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        }
        .map_err(|e| InfrastructureError::BootstrapFailed {
            message: format!("日志初始化失败: {}", e),
        })?;

        info!("日志系统初始化完成");
        Ok(())
    }
}
