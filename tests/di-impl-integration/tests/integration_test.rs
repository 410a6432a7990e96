//! Centralized integration tests for di-impl crate

use component_macros::Injectable;
use di_abstractions::{DiContainer, EntryBuilder};
use di_impl::ApplicationContainer;
use infrastructure_common::{
    ConfigSource, DependencyError, SimpleConfigSource, CONFIG_SOURCES_TAG,
};
use infrastructure_composition::{set_env_for_tests, PROGRAMMATIC_CONFIG_SOURCE};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

trait SomethingDoer: Send + Sync {
    fn do_something(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
struct SimpleStruct {
    value: String,
}

impl SomethingDoer for SimpleStruct {
    fn do_something(&self) -> String {
        self.value.clone()
    }
}

fn simple(value: &str) -> impl Fn() -> Option<SimpleStruct> + Send + Sync + 'static {
    let value = value.to_string();
    move || {
        Some(SimpleStruct {
            value: value.clone(),
        })
    }
}

/// 注册一个同时提供 `dyn SomethingDoer` 的条目
fn put_doer(container: &ApplicationContainer, name: &str, tags: &[&str]) {
    container.put(
        EntryBuilder::new(name, simple(name))
            .tags(tags.iter().copied())
            .provides::<dyn SomethingDoer>(|simple| simple)
            .build(),
    );
}

fn put_nil(container: &ApplicationContainer, name: &str, tags: &[&str]) {
    container.put_factory(|| None::<SimpleStruct>, name, tags);
}

#[derive(Injectable)]
struct WithContainer {
    #[inject("ApplicationContainer")]
    container: Arc<ApplicationContainer>,
}

#[derive(Injectable)]
struct SingleA {
    #[inject("A")]
    a: Arc<SimpleStruct>,
}

#[derive(Injectable)]
struct DoerA {
    #[inject("A")]
    a: Arc<dyn SomethingDoer>,
}

#[derive(Injectable)]
struct OrderedA {
    #[inject("A")]
    a: Vec<Arc<dyn SomethingDoer>>,
}

#[derive(Injectable)]
struct KeyedA {
    #[inject("A")]
    a: HashMap<String, Arc<SimpleStruct>>,
}

#[derive(Injectable)]
struct SortedA {
    #[inject("A")]
    a: BTreeMap<String, Arc<dyn SomethingDoer>>,
}

#[derive(Injectable)]
struct Sources {
    #[inject("ConfigSources")]
    sources: Vec<Arc<dyn ConfigSource>>,
}

#[test]
fn test_self_injection() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();

    let same = container.call_injected(|shape: WithContainer| {
        Arc::ptr_eq(&shape.container, &container)
    })?;
    assert!(same);
    Ok(())
}

#[test]
fn test_simple_resolution() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    container.put_factory(simple("A"), "A", &[]);

    let value = container.call_injected(|shape: SingleA| shape.a.value.clone())?;
    assert_eq!(value, "A");
    Ok(())
}

#[test]
fn test_nil_filtering() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    put_nil(&container, "NIL", &["A"]);
    container.put_factory(simple("NOT_NIL"), "NOT_NIL", &["A"]);

    let value = container.call_injected(|shape: SingleA| shape.a.value.clone())?;
    assert_eq!(value, "NOT_NIL");
    Ok(())
}

#[test]
fn test_ambiguity() {
    let container = ApplicationContainer::new();
    container.put_factory(simple("A1"), "A1", &["A"]);
    container.put_factory(simple("A2"), "A2", &["A"]);

    let mut invoked = false;
    let result = container.call_injected(|_: SingleA| invoked = true);

    match result {
        Err(DependencyError::AmbiguousComponent { key, candidates, .. }) => {
            assert_eq!(key, "A");
            assert_eq!(candidates, vec!["A1", "A2"]);
        }
        other => panic!("expected AmbiguousComponent, got {:?}", other.err()),
    }
    assert!(!invoked);
}

#[test]
fn test_absence() {
    let container = ApplicationContainer::new();

    let Err(err) = container.resolve::<SingleA>() else {
        panic!("expected MissingComponent");
    };
    assert!(matches!(err, DependencyError::MissingComponent { ref key, .. } if key == "A"));
    assert_eq!(err.key(), Some("A"));
}

#[test]
fn test_capability_matching() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    put_doer(&container, "A", &[]);

    let via_capability = container.call_injected(|shape: DoerA| shape.a.do_something())?;
    let via_concrete = container.call_injected(|shape: SingleA| shape.a.do_something())?;
    assert_eq!(via_capability, "A");
    assert_eq!(via_capability, via_concrete);
    Ok(())
}

#[test]
fn test_undeclared_capability_is_missing() {
    let container = ApplicationContainer::new();
    container.put_factory(simple("A"), "A", &[]);

    let Err(err) = container.resolve::<DoerA>() else {
        panic!("expected MissingComponent");
    };
    assert!(matches!(err, DependencyError::MissingComponent { .. }));
}

#[test]
fn test_override_shadows_and_restores() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    container.put_instance(SimpleStruct { value: "X".into() }, "A", &[]);
    container.test_put_instance(SimpleStruct { value: "Y".into() }, "TEST", &["A"]);
    assert!(container.is_overridden());

    let overridden = container.call_injected(|shape: SingleA| shape.a.value.clone())?;
    assert_eq!(overridden, "Y");

    container.clear_tests();
    assert!(!container.is_overridden());

    let restored = container.call_injected(|shape: SingleA| shape.a.value.clone())?;
    assert_eq!(restored, "X");
    Ok(())
}

#[test]
fn test_override_only_shadows_its_own_tags() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    container.put_factory(simple("A"), "A", &[]);
    container.test_put_factory(simple("B"), "B", &[]);

    // 测试层中没有标签 A，核心层的 A 仍然可见
    let value = container.call_injected(|shape: SingleA| shape.a.value.clone())?;
    assert_eq!(value, "A");

    // 测试层中的缺席条目同样遮蔽核心层
    container.test_put_factory(|| None::<SimpleStruct>, "NIL", &["A"]);
    assert!(matches!(
        container.resolve::<SingleA>(),
        Err(DependencyError::MissingComponent { .. })
    ));
    Ok(())
}

#[test]
fn test_ordered_collection_assembly() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    put_nil(&container, "NIL", &["A"]);
    put_doer(&container, "A3", &["A"]);
    put_doer(&container, "A1", &["A"]);
    put_nil(&container, "NIL2", &["A"]);
    put_doer(&container, "A2", &["A"]);

    let values = container.call_injected(|shape: OrderedA| {
        shape
            .a
            .iter()
            .map(|doer| doer.do_something())
            .collect::<Vec<_>>()
    })?;
    assert_eq!(values, vec!["A3", "A1", "A2"]);
    Ok(())
}

#[test]
fn test_keyed_collection_assembly() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    put_nil(&container, "NIL", &["A"]);
    put_doer(&container, "A1", &["A"]);
    put_doer(&container, "A2", &["A"]);
    put_doer(&container, "A3", &["A"]);

    let keyed = container.resolve::<KeyedA>()?.a;
    assert_eq!(keyed.len(), 3);
    for name in ["A1", "A2", "A3"] {
        assert_eq!(keyed[name].value, name);
    }
    assert!(!keyed.contains_key("NIL"));

    let sorted = container.resolve::<SortedA>()?.a;
    assert_eq!(
        sorted.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["A1", "A2", "A3"]
    );
    Ok(())
}

#[test]
fn test_clear_tests_is_idempotent() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    container.put_factory(simple("A"), "A", &[]);

    container.clear_tests();
    container.clear_tests();
    assert!(!container.is_overridden());

    let value = container.call_injected(|shape: SingleA| shape.a.value.clone())?;
    assert_eq!(value, "A");
    Ok(())
}

#[test]
fn test_programmatic_config_source_shadows_core_sources() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    let file_source = SimpleConfigSource::new(
        200,
        HashMap::from([("db.host".to_string(), "prod".to_string())]),
    );
    container.put(
        EntryBuilder::instance("FileConfigSource", file_source)
            .tag(CONFIG_SOURCES_TAG)
            .provides::<dyn ConfigSource>(|source| source)
            .build(),
    );

    set_env_for_tests(
        container.as_ref(),
        HashMap::from([("db.host".to_string(), "localhost".to_string())]),
    );

    let hosts = container.call_injected(|shape: Sources| {
        shape
            .sources
            .iter()
            .map(|source| source.env()["db.host"].clone())
            .collect::<Vec<_>>()
    })?;
    assert_eq!(hosts, vec!["localhost"]);
    assert_eq!(
        container.snapshot().effective_entries(CONFIG_SOURCES_TAG)[0].primary_name(),
        PROGRAMMATIC_CONFIG_SOURCE
    );

    container.clear_tests();
    let restored = container.call_injected(|shape: Sources| shape.sources[0].priority())?;
    assert_eq!(restored, 200);
    Ok(())
}

#[test]
fn test_injected_container_can_call_again() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    container.put_factory(simple("A"), "A", &[]);

    let nested = container.call_injected(|shape: WithContainer| {
        shape
            .container
            .call_injected(|inner: SingleA| inner.a.value.clone())
    })??;
    assert_eq!(nested, "A");
    Ok(())
}
