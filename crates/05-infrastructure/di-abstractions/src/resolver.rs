//! 组件解析器抽象接口
//!
//! 按查找键和期望类型从注册表中取出组件，并应用基数规则

use infrastructure_common::DependencyResult;
use std::collections::HashMap;
use std::sync::Arc;

/// 组件解析器 trait
///
/// `X` 可以是具体类型，也可以是条目声明过的能力接口（如 `dyn Trait`）。
/// 类型不匹配的条目以及构造结果缺席的条目在应用基数规则之前即被过滤。
pub trait ComponentResolver {
    /// 解析恰好一个组件
    ///
    /// 没有候选时返回 `MissingComponent`，多于一个时返回 `AmbiguousComponent`。
    fn resolve_single<X>(&self, key: &str) -> DependencyResult<Arc<X>>
    where
        X: ?Sized + Send + Sync + 'static;

    /// 解析任意数量的组件，按注册顺序排列
    fn resolve_ordered<X>(&self, key: &str) -> DependencyResult<Vec<Arc<X>>>
    where
        X: ?Sized + Send + Sync + 'static;

    /// 解析任意数量的组件，以主名称为键
    fn resolve_keyed<X>(&self, key: &str) -> DependencyResult<HashMap<String, Arc<X>>>
    where
        X: ?Sized + Send + Sync + 'static;
}
