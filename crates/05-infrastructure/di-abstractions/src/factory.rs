//! 组件工厂与注册条目
//!
//! [`Entry`] 是容器中的不可变注册记录：一个零参数构造函数、一个主名称，
//! 以及可用于查找的标签集合。条目通过 [`EntryBuilder`] 构建。

use infrastructure_common::{BoxError, TypeInfo};
use std::any::{Any, TypeId};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// 类型擦除后的组件实例
pub type Instance = Arc<dyn Any + Send + Sync>;

/// 类型擦除后的构造函数，`Ok(None)` 表示组件缺席
type Constructor = Arc<dyn Fn() -> Result<Option<Instance>, BoxError> + Send + Sync>;

/// 把实例转换为 `Box<Arc<I>>` 的能力转换函数
type Caster = Arc<dyn Fn(Instance) -> Option<Box<dyn Any + Send + Sync>> + Send + Sync>;

/// 条目能够提供的一种类型（具体类型或能力接口）
#[derive(Clone)]
struct Capability {
    type_info: TypeInfo,
    cast: Caster,
}

/// 组件注册条目
#[derive(Clone)]
pub struct Entry {
    primary_name: String,
    tags: BTreeSet<String>,
    type_info: TypeInfo,
    constructor: Constructor,
    capabilities: HashMap<TypeId, Capability>,
}

impl Entry {
    /// 以无法失败、可能缺席的工厂创建构建器
    pub fn builder<T, F>(name: impl Into<String>, factory: F) -> EntryBuilder<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        EntryBuilder::new(name, factory)
    }

    /// 主名称
    pub fn primary_name(&self) -> &str {
        &self.primary_name
    }

    /// 全部查找标签，始终包含主名称
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// 构造函数产出的具体类型
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 是否可以通过该标签查找到
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// 是否能以指定类型提供实例
    pub fn provides_type(&self, type_id: TypeId) -> bool {
        self.capabilities.contains_key(&type_id)
    }

    /// 条目能够提供的全部类型名称
    pub fn provided_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .capabilities
            .values()
            .map(|capability| capability.type_info.name)
            .collect();
        names.sort_unstable();
        names
    }

    /// 调用构造函数，返回类型擦除的实例
    pub fn construct(&self) -> Result<Option<Instance>, BoxError> {
        (self.constructor)()
    }

    /// 调用构造函数并以 `Arc<X>` 交付
    ///
    /// 条目不提供 `X` 或构造结果缺席时返回 `Ok(None)`。
    pub fn construct_as<X>(&self) -> Result<Option<Arc<X>>, BoxError>
    where
        X: ?Sized + Send + Sync + 'static,
    {
        let Some(capability) = self.capabilities.get(&TypeId::of::<X>()) else {
            return Ok(None);
        };
        let Some(instance) = self.construct()? else {
            return Ok(None);
        };

        Ok((capability.cast)(instance)
            .and_then(|boxed| boxed.downcast::<Arc<X>>().ok())
            .map(|typed| *typed))
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("primary_name", &self.primary_name)
            .field("tags", &self.tags)
            .field("type_info", &self.type_info.name)
            .field("provides", &self.provided_types())
            .field("constructor", &"<function>")
            .finish()
    }
}

/// 条目构建器
pub struct EntryBuilder<T> {
    primary_name: String,
    tags: BTreeSet<String>,
    constructor: Constructor,
    capabilities: HashMap<TypeId, Capability>,
    component_type: PhantomData<fn() -> T>,
}

impl<T> EntryBuilder<T>
where
    T: Send + Sync + 'static,
{
    /// 使用可能缺席的工厂
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        Self::shared(name, move || factory().map(Arc::new))
    }

    /// 使用直接返回 `Arc<T>` 的工厂，用于共享已有实例
    pub fn shared<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Option<Arc<T>> + Send + Sync + 'static,
    {
        Self::with_constructor(name, move || Ok(factory()))
    }

    /// 使用可能失败的工厂，失败会中止本次解析
    pub fn fallible<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Option<T>, BoxError> + Send + Sync + 'static,
    {
        Self::with_constructor(name, move || factory().map(|value| value.map(Arc::new)))
    }

    /// 注册现成的实例，每次解析交付同一个 `Arc`
    pub fn instance(name: impl Into<String>, instance: T) -> Self {
        let shared = Arc::new(instance);
        Self::shared(name, move || Some(Arc::clone(&shared)))
    }

    fn with_constructor<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Option<Arc<T>>, BoxError> + Send + Sync + 'static,
    {
        let primary_name = name.into();
        let constructor: Constructor = Arc::new(
            move || -> Result<Option<Instance>, BoxError> {
                Ok(factory()?.map(|value| value as Instance))
            },
        );

        let mut tags = BTreeSet::new();
        tags.insert(primary_name.clone());

        Self {
            primary_name,
            tags,
            constructor,
            capabilities: HashMap::new(),
            component_type: PhantomData,
        }
        .provides::<T>(|value| value)
    }

    /// 添加一个分组标签
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// 添加多个分组标签
    pub fn tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// 声明该组件满足的能力接口
    ///
    /// ```rust
    /// use di_abstractions::Entry;
    ///
    /// trait Greeter: Send + Sync {
    ///     fn greet(&self) -> String;
    /// }
    ///
    /// struct English;
    /// impl Greeter for English {
    ///     fn greet(&self) -> String {
    ///         "hello".to_string()
    ///     }
    /// }
    ///
    /// let entry = Entry::builder("english", || Some(English))
    ///     .provides::<dyn Greeter>(|english| english)
    ///     .build();
    /// let greeter = entry.construct_as::<dyn Greeter>().unwrap().unwrap();
    /// assert_eq!(greeter.greet(), "hello");
    /// ```
    pub fn provides<I>(mut self, cast: impl Fn(Arc<T>) -> Arc<I> + Send + Sync + 'static) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let caster: Caster = Arc::new(move |instance: Instance| {
            instance
                .downcast::<T>()
                .ok()
                .map(|typed| Box::new(cast(typed)) as Box<dyn Any + Send + Sync>)
        });

        self.capabilities.insert(
            TypeId::of::<I>(),
            Capability {
                type_info: TypeInfo::of::<I>(),
                cast: caster,
            },
        );
        self
    }

    /// 构建不可变条目
    pub fn build(self) -> Entry {
        Entry {
            primary_name: self.primary_name,
            tags: self.tags,
            type_info: TypeInfo::of::<T>(),
            constructor: self.constructor,
            capabilities: self.capabilities,
        }
    }
}

impl<T> From<EntryBuilder<T>> for Entry
where
    T: Send + Sync + 'static,
{
    fn from(builder: EntryBuilder<T>) -> Self {
        builder.build()
    }
}
