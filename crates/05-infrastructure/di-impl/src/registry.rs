//! 分层组件注册表实现

use di_abstractions::{ComponentRegistry, Entry, Layer, RegistrySnapshot};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// 核心层与测试层
///
/// 两层都以 `Arc` 持有，写入时写时复制，已发出的快照不受影响。
#[derive(Debug, Default)]
struct Layers {
    core: Arc<Layer>,
    test: Option<Arc<Layer>>,
}

/// 分层组件注册表
#[derive(Debug, Default)]
pub struct LayeredRegistry {
    layers: RwLock<Layers>,
}

impl LayeredRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 核心层条目数量
    pub fn core_len(&self) -> usize {
        self.layers.read().core.len()
    }

    /// 测试层条目数量
    pub fn test_len(&self) -> usize {
        self.layers.read().test.as_ref().map_or(0, |test| test.len())
    }
}

impl ComponentRegistry for LayeredRegistry {
    fn put(&self, entry: Entry) {
        debug!(
            "注册核心组件: {} ({}), 标签: {:?}",
            entry.primary_name(),
            entry.type_info(),
            entry.tags()
        );

        let mut layers = self.layers.write();
        Arc::make_mut(&mut layers.core).push(entry);
    }

    fn test_put(&self, entry: Entry) {
        debug!(
            "注册测试组件: {} ({}), 标签: {:?}",
            entry.primary_name(),
            entry.type_info(),
            entry.tags()
        );

        let mut layers = self.layers.write();
        let test = layers.test.get_or_insert_with(|| {
            info!("创建测试层，进入覆盖状态");
            Arc::default()
        });
        Arc::make_mut(test).push(entry);
    }

    fn clear_tests(&self) {
        // 写锁在取出测试层后立即释放，条目的析构不在锁内执行
        let removed = self.layers.write().test.take();
        if let Some(test) = removed {
            info!("清除测试层 ({} 个条目)，恢复核心配置", test.len());
        }
    }

    fn has_test_layer(&self) -> bool {
        self.layers.read().test.is_some()
    }

    fn snapshot(&self) -> RegistrySnapshot {
        let layers = self.layers.read();
        RegistrySnapshot::new(Arc::clone(&layers.core), layers.test.clone())
    }
}
