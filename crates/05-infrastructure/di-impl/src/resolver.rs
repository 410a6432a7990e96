//! 基于注册表快照的组件解析器

use di_abstractions::{ComponentResolver, RegistrySnapshot};
use infrastructure_common::{DependencyError, DependencyResult};
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{trace, warn};

/// 快照解析器
///
/// 只读取一份快照，构造函数在不持有任何锁的情况下执行，
/// 因此构造函数内部可以再次发起注入。
#[derive(Debug, Clone)]
pub struct SnapshotResolver<'a> {
    snapshot: &'a RegistrySnapshot,
    warn_on_duplicate_keys: bool,
}

impl<'a> SnapshotResolver<'a> {
    /// 创建新的解析器
    pub fn new(snapshot: &'a RegistrySnapshot) -> Self {
        Self {
            snapshot,
            warn_on_duplicate_keys: true,
        }
    }

    /// 设置键控集合重复主名称时是否警告
    pub fn with_duplicate_key_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_duplicate_keys = enabled;
        self
    }

    /// 计算候选集合：有效条目 -> 类型匹配 -> 调用构造函数 -> 过滤缺席
    fn candidates<X>(&self, key: &str) -> DependencyResult<Vec<(&'a str, Arc<X>)>>
    where
        X: ?Sized + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<X>();
        let mut candidates = Vec::new();

        for entry in self.snapshot.effective_entries(key) {
            let name = entry.primary_name();
            if !entry.provides_type(type_id) {
                trace!("组件 {} ({}) 不提供 {}，已跳过", name, entry.type_info(), type_name::<X>());
                continue;
            }

            match entry.construct_as::<X>() {
                Ok(Some(value)) => candidates.push((name, value)),
                Ok(None) => trace!("组件 {} 构造结果为空，已过滤", name),
                Err(source) => {
                    return Err(DependencyError::ComponentCreationFailed {
                        key: key.to_string(),
                        name: name.to_string(),
                        source,
                    })
                }
            }
        }

        Ok(candidates)
    }
}

impl ComponentResolver for SnapshotResolver<'_> {
    fn resolve_single<X>(&self, key: &str) -> DependencyResult<Arc<X>>
    where
        X: ?Sized + Send + Sync + 'static,
    {
        let mut candidates = self.candidates::<X>(key)?;

        if candidates.len() > 1 {
            let names = candidates
                .iter()
                .map(|(name, _)| (*name).to_string())
                .collect();
            return Err(DependencyError::ambiguous(key, type_name::<X>(), names));
        }

        candidates
            .pop()
            .map(|(_, value)| value)
            .ok_or_else(|| DependencyError::missing(key, type_name::<X>()))
    }

    fn resolve_ordered<X>(&self, key: &str) -> DependencyResult<Vec<Arc<X>>>
    where
        X: ?Sized + Send + Sync + 'static,
    {
        Ok(self
            .candidates::<X>(key)?
            .into_iter()
            .map(|(_, value)| value)
            .collect())
    }

    fn resolve_keyed<X>(&self, key: &str) -> DependencyResult<HashMap<String, Arc<X>>>
    where
        X: ?Sized + Send + Sync + 'static,
    {
        let mut keyed = HashMap::new();

        for (name, value) in self.candidates::<X>(key)? {
            if keyed.insert(name.to_string(), value).is_some() && self.warn_on_duplicate_keys {
                warn!("查找键 {} 下存在重复的主名称 {}，保留最后注册的组件", key, name);
            }
        }

        Ok(keyed)
    }
}
