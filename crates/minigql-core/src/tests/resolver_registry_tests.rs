//! Tests for resolver registration and lookup.

use crate::Arguments;
use crate::OperationKind;
use crate::ResolverError;
use crate::ResolverRegistry;
use crate::Value;
use rayon::prelude::*;
use std::sync::Arc;

fn call(registry: &ResolverRegistry, kind: OperationKind, name: &str) -> Value {
    let Some(resolver) = registry.lookup(kind, name) else {
        panic!("Expected a {kind} resolver named `{name}`");
    };
    resolver.call(None, &Arguments::new()).unwrap()
}

#[test]
fn test_lookup_unregistered_is_absent() {
    let registry = ResolverRegistry::new();
    assert!(registry.lookup(OperationKind::Query, "hello").is_none());
}

#[test]
fn test_maps_are_independent() {
    let registry = ResolverRegistry::new();
    registry.register_query("hello", |_, _| Ok(Value::from("query")));
    registry.register_mutation("hello", |_, _| Ok(Value::from("mutation")));

    assert_eq!(call(&registry, OperationKind::Query, "hello"), Value::from("query"));
    assert_eq!(call(&registry, OperationKind::Mutation, "hello"), Value::from("mutation"));
    assert!(!registry.contains(OperationKind::Subscription, "hello"));
}

#[test]
fn test_last_registration_wins() {
    let registry = ResolverRegistry::new();
    registry.register_query("n", |_, _| Ok(Value::Int(1)));
    registry.register_query("n", |_, _| Ok(Value::Int(2)));
    assert_eq!(call(&registry, OperationKind::Query, "n"), Value::Int(2));
    assert_eq!(registry.field_names(OperationKind::Query), vec!["n".to_string()]);
}

#[test]
fn test_resolver_receives_arguments() {
    let registry = ResolverRegistry::new();
    registry.register_query("echo", |_, args| {
        args.get("text").cloned().ok_or_else(|| ResolverError::from("missing text"))
    });
    let Some(resolver) = registry.lookup(OperationKind::Query, "echo") else {
        panic!("Expected `echo` to be registered");
    };

    let mut args = Arguments::new();
    args.insert("text".to_string(), Value::from("hi"));
    assert_eq!(resolver.call(None, &args), Ok(Value::from("hi")));
    assert_eq!(
        resolver.call(None, &Arguments::new()),
        Err(ResolverError::new("missing text")),
    );
}

#[test]
fn test_field_names_are_sorted() {
    let registry = ResolverRegistry::new();
    for name in ["zeta", "alpha", "mid"] {
        registry.register_subscription(name, |_, _| Ok(Value::Null));
    }
    assert_eq!(
        registry.field_names(OperationKind::Subscription),
        vec!["alpha".to_string(), "mid".to_string(), "zeta".to_string()],
    );
}

#[test]
fn test_concurrent_registration_and_lookup() {
    let registry = Arc::new(ResolverRegistry::new());
    registry.register_query("shared", |_, _| Ok(Value::Int(0)));

    (0..200_i64).into_par_iter().for_each(|i| {
        let name = format!("field_{i}");
        registry.register_query(name.clone(), move |_, _| Ok(Value::Int(i)));
        assert!(registry.lookup(OperationKind::Query, "shared").is_some());
        assert_eq!(call(&registry, OperationKind::Query, &name), Value::Int(i));
    });

    assert_eq!(registry.field_names(OperationKind::Query).len(), 201);
}
