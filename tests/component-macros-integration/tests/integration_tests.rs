//! Centralized integration tests for component-macros crate

use component_macros::Injectable;
use di_abstractions::{Cardinality, DiContainer, EntryBuilder, Injectable as _, TypeInfo};
use di_impl::ApplicationContainer;
use std::collections::HashMap;
use std::sync::Arc;

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

#[derive(Debug)]
struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

#[derive(Injectable)]
struct Deps {
    #[inject("ApplicationContainer")]
    container: Arc<ApplicationContainer>,
    #[inject(key = "Greeters")]
    greeters: Vec<Arc<dyn Greeter>>,
    #[inject("Greeters")]
    by_name: HashMap<String, Arc<dyn Greeter>>,
    english: Arc<English>,
}

#[derive(Injectable)]
struct RawIdent {
    r#type: Arc<String>,
}

#[derive(Injectable)]
struct Generic<T: Send + Sync + 'static> {
    #[inject("value")]
    value: Arc<T>,
}

#[derive(Injectable)]
struct Nothing;

fn english_entry() -> EntryBuilder<English> {
    EntryBuilder::new("english", || Some(English))
        .tag("Greeters")
        .provides::<dyn Greeter>(|english| english)
}

#[test]
fn test_derived_field_descriptors() {
    let fields = Deps::fields();
    let keys: Vec<_> = fields.iter().map(|field| field.key).collect();
    assert_eq!(
        keys,
        vec!["ApplicationContainer", "Greeters", "Greeters", "english"]
    );

    assert_eq!(fields[0].cardinality, Cardinality::Single);
    assert_eq!(fields[1].cardinality, Cardinality::OrderedCollection);
    assert_eq!(fields[2].cardinality, Cardinality::KeyedCollection);
    assert_eq!(fields[1].element_type, TypeInfo::of::<dyn Greeter>());
    assert_eq!(fields[3].name, "english");
}

#[test]
fn test_derived_shape_resolves() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    container.put(english_entry().build());

    let greeting = container.call_injected(|deps: Deps| {
        assert!(Arc::ptr_eq(&deps.container, &container));
        assert_eq!(deps.greeters.len(), 1);
        assert!(deps.by_name.contains_key("english"));
        format!("{} {:?}", deps.greeters[0].greet(), deps.english)
    })?;

    assert_eq!(greeting, "hello English");
    Ok(())
}

#[test]
fn test_raw_identifier_uses_unprefixed_key() -> anyhow::Result<()> {
    assert_eq!(RawIdent::fields()[0].key, "type");

    let container = ApplicationContainer::new();
    container.put_instance(String::from("text"), "type", &[]);
    let raw = container.resolve::<RawIdent>()?;
    assert_eq!(*raw.r#type, "text");
    Ok(())
}

#[test]
fn test_generic_shape() -> anyhow::Result<()> {
    let container = ApplicationContainer::new();
    container.put_instance(7_u64, "value", &[]);

    let value = container.call_injected(|generic: Generic<u64>| *generic.value)?;
    assert_eq!(value, 7);
    Ok(())
}

#[test]
fn test_unit_struct_is_empty_shape() -> anyhow::Result<()> {
    assert!(Nothing::fields().is_empty());

    let container = ApplicationContainer::new();
    let value = container.call_injected(|_: Nothing| "called")?;
    assert_eq!(value, "called");
    Ok(())
}
