//! 注入目标描述
//!
//! 注入目标是一个由若干字段组成的结构体。每个字段声明查找键、基数类别和
//! 元素类型，字段之间互不依赖。`#[derive(Injectable)]` 会为具名字段结构体
//! 生成这些描述。

use crate::resolver::ComponentResolver;
use infrastructure_common::{Cardinality, DependencyResult, TypeInfo};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// 注入字段描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionField {
    /// 字段标识符
    pub name: &'static str,
    /// 查找键，默认与字段标识符相同
    pub key: &'static str,
    /// 元素类型
    pub element_type: TypeInfo,
    /// 基数类别
    pub cardinality: Cardinality,
}

impl InjectionField {
    /// 根据字段声明类型创建描述
    pub fn of<F: InjectField>(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            element_type: F::element_type(),
            cardinality: F::CARDINALITY,
        }
    }
}

/// 可作为注入字段的类型
///
/// 基数由声明类型决定：`Arc<X>` 为单个，`Vec<Arc<X>>` 为有序集合，
/// `HashMap<String, Arc<X>>` / `BTreeMap<String, Arc<X>>` 为键控集合。
pub trait InjectField: Sized {
    /// 基数类别
    const CARDINALITY: Cardinality;

    /// 元素类型信息
    fn element_type() -> TypeInfo;

    /// 解析该字段
    fn resolve_field<R: ComponentResolver>(resolver: &R, key: &str) -> DependencyResult<Self>;
}

impl<X> InjectField for Arc<X>
where
    X: ?Sized + Send + Sync + 'static,
{
    const CARDINALITY: Cardinality = Cardinality::Single;

    fn element_type() -> TypeInfo {
        TypeInfo::of::<X>()
    }

    fn resolve_field<R: ComponentResolver>(resolver: &R, key: &str) -> DependencyResult<Self> {
        resolver.resolve_single::<X>(key)
    }
}

impl<X> InjectField for Vec<Arc<X>>
where
    X: ?Sized + Send + Sync + 'static,
{
    const CARDINALITY: Cardinality = Cardinality::OrderedCollection;

    fn element_type() -> TypeInfo {
        TypeInfo::of::<X>()
    }

    fn resolve_field<R: ComponentResolver>(resolver: &R, key: &str) -> DependencyResult<Self> {
        resolver.resolve_ordered::<X>(key)
    }
}

impl<X> InjectField for HashMap<String, Arc<X>>
where
    X: ?Sized + Send + Sync + 'static,
{
    const CARDINALITY: Cardinality = Cardinality::KeyedCollection;

    fn element_type() -> TypeInfo {
        TypeInfo::of::<X>()
    }

    fn resolve_field<R: ComponentResolver>(resolver: &R, key: &str) -> DependencyResult<Self> {
        resolver.resolve_keyed::<X>(key)
    }
}

impl<X> InjectField for BTreeMap<String, Arc<X>>
where
    X: ?Sized + Send + Sync + 'static,
{
    const CARDINALITY: Cardinality = Cardinality::KeyedCollection;

    fn element_type() -> TypeInfo {
        TypeInfo::of::<X>()
    }

    fn resolve_field<R: ComponentResolver>(resolver: &R, key: &str) -> DependencyResult<Self> {
        Ok(resolver.resolve_keyed::<X>(key)?.into_iter().collect())
    }
}

/// 注入目标 trait
///
/// 通常由 `#[derive(Injectable)]` 生成：
///
/// ```rust,ignore
/// #[derive(Injectable)]
/// struct Deps {
///     #[inject("ApplicationContainer")]
///     container: Arc<ApplicationContainer>,
///     sources: Vec<Arc<dyn ConfigSource>>,
/// }
/// ```
pub trait Injectable: Sized {
    /// 目标名称，用于错误报告
    fn shape_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// 字段描述列表
    fn fields() -> Vec<InjectionField>;

    /// 逐字段解析并组装目标，任一字段失败即返回该错误
    ///
    /// 每次查找的键、基数和元素类型都必须出现在 [`Injectable::fields`] 中，
    /// 否则注入器返回 `InvalidInjectionTarget`。
    fn inject<R: ComponentResolver>(resolver: &R) -> DependencyResult<Self>;
}

impl Injectable for () {
    fn fields() -> Vec<InjectionField> {
        Vec::new()
    }

    fn inject<R: ComponentResolver>(_resolver: &R) -> DependencyResult<Self> {
        Ok(())
    }
}
