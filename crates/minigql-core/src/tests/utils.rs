//! Shared fixtures for core tests.

use crate::Executor;
use crate::ResolverRegistry;
use crate::Value;
use minigql_parser::ast;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: Option<String>,
}

crate::record!(User {
    user_id as "id,omitempty",
    name,
    email,
});

#[derive(Clone, Debug)]
pub struct Post {
    pub title: String,
    pub author: User,
    pub tags: Vec<String>,
}

crate::record!(Post { title, author, tags });

pub fn ada() -> User {
    User {
        user_id: 1,
        name: "Ada".to_string(),
        email: Some("ada@example.com".to_string()),
    }
}

pub fn grace() -> User {
    User {
        user_id: 2,
        name: "Grace".to_string(),
        email: None,
    }
}

pub fn executor_with(registry: ResolverRegistry) -> Executor {
    Executor::new(Arc::new(registry))
}

/// Parses `source` cleanly and returns the first root field of its first
/// operation.
pub fn first_root_field(source: &str) -> ast::Field {
    let result = minigql_parser::parse(source);
    assert!(
        !result.has_errors(),
        "Unexpected parse errors for {source:?}:\n{}",
        result.format_errors(Some(source)),
    );
    let doc = result.into_ast();
    let Some(op) = doc.operations().next() else {
        panic!("Expected an operation in {source:?}");
    };
    match op.selection_set.fields().next() {
        Some(field) => field.clone(),
        None => panic!("Expected a root field in {source:?}"),
    }
}

/// Serializes a value to compact JSON.
pub fn to_json(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value).unwrap()
}

pub fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}
