//! 组件注册表抽象接口

use crate::factory::Entry;
use std::sync::Arc;

/// 组件注册表 trait
///
/// 持有一个核心层和至多一个测试层，只支持追加和清除测试层
pub trait ComponentRegistry: Send + Sync {
    /// 追加条目到核心层
    fn put(&self, entry: Entry);

    /// 追加条目到测试层（不存在时创建）
    fn test_put(&self, entry: Entry);

    /// 丢弃整个测试层，可重复调用
    fn clear_tests(&self);

    /// 当前是否存在测试层
    fn has_test_layer(&self) -> bool;

    /// 获取一次解析期间使用的一致性快照
    fn snapshot(&self) -> RegistrySnapshot;
}

/// 按插入顺序排列的条目层
#[derive(Debug, Clone, Default)]
pub struct Layer {
    entries: Vec<Arc<Entry>>,
}

impl Layer {
    /// 创建空层
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加条目
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(Arc::new(entry));
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 带有指定标签的条目，按插入顺序
    pub fn tagged<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Arc<Entry>> + 'a {
        let tag = tag.to_owned();
        self.entries.iter().filter(move |entry| entry.has_tag(&tag))
    }

    /// 是否存在带有指定标签的条目
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.entries.iter().any(|entry| entry.has_tag(tag))
    }
}

/// 注册表快照
///
/// 核心层和测试层在取快照时被共享引用，此后的注册不会影响快照。
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    core: Arc<Layer>,
    test: Option<Arc<Layer>>,
}

impl RegistrySnapshot {
    /// 创建新的快照
    pub fn new(core: Arc<Layer>, test: Option<Arc<Layer>>) -> Self {
        Self { core, test }
    }

    /// 测试层
    pub fn test(&self) -> Option<&Layer> {
        self.test.as_deref()
    }

    /// 指定标签的有效条目集合
    ///
    /// 测试层只要有一个条目带有该标签，核心层中同标签的条目就全部被遮蔽。
    pub fn effective_entries(&self, tag: &str) -> Vec<&Arc<Entry>> {
        match self.test() {
            Some(test) if test.contains_tag(tag) => test.tagged(tag).collect(),
            _ => self.core.tagged(tag).collect(),
        }
    }
}
