//! 注入器实现
//!
//! 校验注入目标的字段描述，基于快照解析全部字段，成功后才调用目标过程。

use crate::resolver::SnapshotResolver;
use di_abstractions::{ComponentResolver, Injectable, InjectionField, RegistrySnapshot};
use infrastructure_common::{Cardinality, DependencyError, DependencyResult, TypeInfo};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// 注入器
#[derive(Debug, Clone)]
pub struct Injector {
    warn_on_duplicate_keys: bool,
}

impl Injector {
    /// 创建新的注入器
    pub fn new() -> Self {
        Self {
            warn_on_duplicate_keys: true,
        }
    }

    /// 设置键控集合重复主名称时是否警告
    pub fn with_duplicate_key_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_duplicate_keys = enabled;
        self
    }

    /// 校验注入目标的字段描述
    ///
    /// 查找键不能为空，字段标识符不能重复。
    pub fn validate<S: Injectable>() -> DependencyResult<Vec<InjectionField>> {
        let fields = S::fields();
        let mut seen = HashSet::new();

        for field in &fields {
            if field.name.is_empty() || field.key.is_empty() {
                return Err(DependencyError::invalid_target(
                    S::shape_name(),
                    format!("字段 '{}' 的查找键为空", field.name),
                ));
            }
            if !seen.insert(field.name) {
                return Err(DependencyError::invalid_target(
                    S::shape_name(),
                    format!("字段 '{}' 重复声明", field.name),
                ));
            }
        }

        Ok(fields)
    }

    /// 基于快照组装注入目标
    pub fn resolve<S: Injectable>(&self, snapshot: &RegistrySnapshot) -> DependencyResult<S> {
        let fields = Self::validate::<S>()?;
        debug!("解析注入目标 {} ({} 个字段)", S::shape_name(), fields.len());
        for field in &fields {
            debug!(
                "  {} <- {} [{}] {}",
                field.name, field.key, field.cardinality, field.element_type
            );
        }

        let resolver = DeclaredFieldsResolver {
            target: S::shape_name(),
            fields: &fields,
            inner: SnapshotResolver::new(snapshot)
                .with_duplicate_key_warnings(self.warn_on_duplicate_keys),
        };

        S::inject(&resolver).map_err(|err| {
            debug!("注入目标 {} 解析失败: {}", S::shape_name(), err);
            err
        })
    }

    /// 组装注入目标并调用 `procedure`，返回其结果
    ///
    /// 解析失败时 `procedure` 不会被调用。
    pub fn call_injected<S, R, F>(
        &self,
        snapshot: &RegistrySnapshot,
        procedure: F,
    ) -> DependencyResult<R>
    where
        S: Injectable,
        F: FnOnce(S) -> R,
    {
        let shape = self.resolve::<S>(snapshot)?;
        Ok(procedure(shape))
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

/// 只放行 `fields()` 中声明过的查找
///
/// `inject()` 请求的键、基数或元素类型与字段描述不一致时返回
/// `InvalidInjectionTarget`，不会触发任何构造函数。
struct DeclaredFieldsResolver<'a> {
    target: &'static str,
    fields: &'a [InjectionField],
    inner: SnapshotResolver<'a>,
}

impl DeclaredFieldsResolver<'_> {
    fn check<X>(&self, key: &str, cardinality: Cardinality) -> DependencyResult<()>
    where
        X: ?Sized + 'static,
    {
        let element_type = TypeInfo::of::<X>();
        let declared = self.fields.iter().any(|field| {
            field.key == key
                && field.cardinality == cardinality
                && field.element_type.id == element_type.id
        });

        if declared {
            Ok(())
        } else {
            Err(DependencyError::invalid_target(
                self.target,
                format!(
                    "查找 '{}' [{}] {} 未在字段描述中声明",
                    key, cardinality, element_type
                ),
            ))
        }
    }
}

impl ComponentResolver for DeclaredFieldsResolver<'_> {
    fn resolve_single<X>(&self, key: &str) -> DependencyResult<Arc<X>>
    where
        X: ?Sized + Send + Sync + 'static,
    {
        self.check::<X>(key, Cardinality::Single)?;
        self.inner.resolve_single(key)
    }

    fn resolve_ordered<X>(&self, key: &str) -> DependencyResult<Vec<Arc<X>>>
    where
        X: ?Sized + Send + Sync + 'static,
    {
        self.check::<X>(key, Cardinality::OrderedCollection)?;
        self.inner.resolve_ordered(key)
    }

    fn resolve_keyed<X>(&self, key: &str) -> DependencyResult<HashMap<String, Arc<X>>>
    where
        X: ?Sized + Send + Sync + 'static,
    {
        self.check::<X>(key, Cardinality::KeyedCollection)?;
        self.inner.resolve_keyed(key)
    }
}
