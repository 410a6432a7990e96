//! 编程式配置源
//!
//! 测试中以键值对形式覆盖配置：向容器的测试层注册一个
//! [`SimpleConfigSource`]，挂在 [`CONFIG_SOURCES_TAG`] 分组下。
//! 由于测试层按标签遮蔽核心层，注入 `Vec<Arc<dyn ConfigSource>>` 时
//! 只会看到测试配置源，`clear_tests` 之后恢复原有配置源。

use di_abstractions::{DiContainer, EntryBuilder};
use infrastructure_common::{
    ConfigSource, SimpleConfigSource, CONFIG_SOURCES_TAG, CONFIG_SOURCE_PRIORITY_TESTS,
};
use std::collections::HashMap;
use tracing::debug;

/// 编程式配置源的主名称
pub const PROGRAMMATIC_CONFIG_SOURCE: &str = "ProgrammaticConfigSource";

/// 以测试优先级注册编程式配置源
pub fn set_env_for_tests<C>(container: &C, env: HashMap<String, String>)
where
    C: DiContainer + ?Sized,
{
    set_env_for_tests_with_priority(container, env, CONFIG_SOURCE_PRIORITY_TESTS);
}

/// 以指定优先级注册编程式配置源
pub fn set_env_for_tests_with_priority<C>(
    container: &C,
    env: HashMap<String, String>,
    priority: i32,
) where
    C: DiContainer + ?Sized,
{
    debug!("注册编程式配置源: {} 个键, 优先级 {}", env.len(), priority);

    let source = SimpleConfigSource::new(priority, env);
    container.test_put(
        EntryBuilder::instance(PROGRAMMATIC_CONFIG_SOURCE, source)
            .tag(CONFIG_SOURCES_TAG)
            .provides::<dyn ConfigSource>(|source| source)
            .build(),
    );
}
