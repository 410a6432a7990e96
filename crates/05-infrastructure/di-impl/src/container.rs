//! 应用容器
//!
//! 组合分层注册表和注入器，并在构造时把自身注册为核心组件。

use crate::injector::Injector;
use crate::registry::LayeredRegistry;
use di_abstractions::{
    ComponentRegistry, ContainerConfig, DiContainer, Entry, EntryBuilder, Injectable,
    RegistrySnapshot,
};
use infrastructure_common::DependencyResult;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::info;

/// 应用容器
///
/// 总是以 `Arc<ApplicationContainer>` 的形式存在，注入目标可以通过
/// [`ContainerConfig::self_name`]（默认 `"ApplicationContainer"`）取得容器自身。
pub struct ApplicationContainer {
    registry: LayeredRegistry,
    injector: Injector,
    config: ContainerConfig,
}

impl ApplicationContainer {
    /// 使用默认配置创建容器
    pub fn new() -> Arc<Self> {
        Self::with_config(ContainerConfig::default())
    }

    /// 使用指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Arc<Self> {
        info!("创建应用容器: {}", config.self_name);

        Arc::new_cyclic(|container: &Weak<Self>| {
            let registry = LayeredRegistry::new();

            // 以弱引用注册自身，容器被释放后该条目的构造结果为缺席
            let container = container.clone();
            let itself =
                EntryBuilder::shared(config.self_name.clone(), move || container.upgrade());
            registry.put(itself.build());

            let injector =
                Injector::new().with_duplicate_key_warnings(config.warn_on_duplicate_keys);

            Self {
                registry,
                injector,
                config,
            }
        })
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 注册核心工厂
    pub fn put_factory<T, F>(&self, factory: F, name: &str, tags: &[&str])
    where
        T: Send + Sync + 'static,
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        self.put(EntryBuilder::new(name, factory).tags(tags.iter().copied()).build());
    }

    /// 注册测试工厂
    pub fn test_put_factory<T, F>(&self, factory: F, name: &str, tags: &[&str])
    where
        T: Send + Sync + 'static,
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        self.test_put(EntryBuilder::new(name, factory).tags(tags.iter().copied()).build());
    }

    /// 注册核心实例
    pub fn put_instance<T>(&self, instance: T, name: &str, tags: &[&str])
    where
        T: Send + Sync + 'static,
    {
        self.put(EntryBuilder::instance(name, instance).tags(tags.iter().copied()).build());
    }

    /// 注册测试实例
    pub fn test_put_instance<T>(&self, instance: T, name: &str, tags: &[&str])
    where
        T: Send + Sync + 'static,
    {
        self.test_put(EntryBuilder::instance(name, instance).tags(tags.iter().copied()).build());
    }

    /// 当前注册表快照
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    /// 解析注入目标
    pub fn resolve<S: Injectable>(&self) -> DependencyResult<S> {
        self.injector.resolve(&self.registry.snapshot())
    }
}

impl DiContainer for ApplicationContainer {
    fn put(&self, entry: Entry) {
        self.registry.put(entry);
    }

    fn test_put(&self, entry: Entry) {
        self.registry.test_put(entry);
    }

    fn clear_tests(&self) {
        self.registry.clear_tests();
    }

    fn is_overridden(&self) -> bool {
        self.registry.has_test_layer()
    }

    fn call_injected<S, R, F>(&self, procedure: F) -> DependencyResult<R>
    where
        S: Injectable,
        F: FnOnce(S) -> R,
    {
        // 快照在调用构造函数前取得，注册表锁此时已释放
        let snapshot = self.registry.snapshot();
        self.injector.call_injected(&snapshot, procedure)
    }
}

impl fmt::Debug for ApplicationContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContainer")
            .field("config", &self.config)
            .field("core_entries", &self.registry.core_len())
            .field("test_entries", &self.registry.test_len())
            .finish()
    }
}
