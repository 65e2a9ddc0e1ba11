//! Tests for parsing operation definitions, selection sets and arguments.

use crate::ast;
use crate::tests::utils::first_field;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse_ok;

// =============================================================================
// Operation kinds
// =============================================================================

#[test]
fn test_operation_keywords() {
    for (source, expected) in [
        ("query { a }", ast::OperationKind::Query),
        ("mutation { a }", ast::OperationKind::Mutation),
        ("subscription { a }", ast::OperationKind::Subscription),
    ] {
        let doc = parse_ok(source);
        assert_eq!(doc.definitions.len(), 1, "{source}");
        assert_eq!(first_operation(&doc).operation, expected, "{source}");
    }
}

/// A document starting with `{` is an anonymous query.
#[test]
fn test_shorthand_query() {
    let doc = parse_ok("{ hello }");
    assert_eq!(doc.definitions.len(), 1);

    let op = first_operation(&doc);
    assert_eq!(op.operation, ast::OperationKind::Query);
    assert_eq!(op.name, None);
    assert!(op.variable_definitions.is_empty());
    assert_eq!(first_field(&op.selection_set).name, "hello");
}

#[test]
fn test_named_operation() {
    let doc = parse_ok("mutation CreateUser { createUser { id } }");
    let op = first_operation(&doc);
    assert_eq!(op.operation, ast::OperationKind::Mutation);
    assert_eq!(op.name.as_deref(), Some("CreateUser"));
}

/// Operation keywords are case-sensitive; `Query` is just a name.
#[test]
fn test_keywords_are_case_sensitive() {
    let result = crate::tests::utils::parse("Query { a }");
    assert!(result.has_errors());
    // `Query` is skipped, then `{ a }` parses as a shorthand query.
    let doc = result.into_ast();
    assert_eq!(doc.definitions.len(), 1);
    assert_eq!(first_operation(&doc).operation, ast::OperationKind::Query);
}

#[test]
fn test_multiple_operations() {
    let doc = parse_ok("query A { a } mutation B { b } { c }");
    let names: Vec<_> = doc
        .operations()
        .map(|op| (op.operation, op.name.clone()))
        .collect();
    assert_eq!(
        names,
        vec![
            (ast::OperationKind::Query, Some("A".to_string())),
            (ast::OperationKind::Mutation, Some("B".to_string())),
            (ast::OperationKind::Query, None),
        ]
    );
}

// =============================================================================
// Variable definitions
// =============================================================================

#[test]
fn test_variable_definitions() {
    let doc = parse_ok("query Q($id: ID!, $tags: [String], $flag) { a }");
    let vars = &first_operation(&doc).variable_definitions;
    assert_eq!(vars.len(), 3);

    assert_eq!(vars[0].variable, "id");
    assert_eq!(
        vars[0].type_annotation,
        Some(ast::TypeAnnotation::named("ID", ast::Nullability::NonNull)),
    );

    assert_eq!(vars[1].variable, "tags");
    assert_eq!(
        vars[1].type_annotation.as_ref().map(|t| t.to_string()),
        Some("[String]".to_string()),
    );

    // `: Type` is optional.
    assert_eq!(vars[2].variable, "flag");
    assert_eq!(vars[2].type_annotation, None);
}

/// Commas between variable definitions are optional.
#[test]
fn test_variable_definitions_without_commas() {
    let doc = parse_ok("query ($a: Int $b: Int) { f }");
    let vars: Vec<_> = first_operation(&doc)
        .variable_definitions
        .iter()
        .map(|v| v.variable.as_str())
        .collect();
    assert_eq!(vars, vec!["a", "b"]);
}

// =============================================================================
// Selection sets
// =============================================================================

#[test]
fn test_nested_selection_sets() {
    let doc = parse_ok("{ user { name, friends { name } } }");
    let user = first_field(&first_operation(&doc).selection_set);
    assert_eq!(user.name, "user");

    let nested = user.selection_set.as_ref().map(|ss| {
        ss.fields().map(|f| f.name.as_str()).collect::<Vec<_>>()
    });
    assert_eq!(nested, Some(vec!["name", "friends"]));

    let friends = user
        .selection_set
        .as_ref()
        .and_then(|ss| ss.fields().nth(1));
    assert!(friends.is_some_and(|f| f.selection_set.is_some()));
}

#[test]
fn test_leaf_field_has_no_selection_set() {
    let doc = parse_ok("{ a b c }");
    let fields: Vec<_> = first_operation(&doc).selection_set.fields().collect();
    assert_eq!(fields.len(), 3);
    assert!(fields.iter().all(|f| f.selection_set.is_none()));
}

#[test]
fn test_empty_selection_set() {
    let doc = parse_ok("query {}");
    assert!(first_operation(&doc).selection_set.is_empty());
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn test_field_arguments() {
    let doc = parse_ok(r#"{ user(id: 4, name: "x", admin: true) { id } }"#);
    let user = first_field(&first_operation(&doc).selection_set);
    assert_eq!(user.arguments.len(), 3);
    assert_eq!(user.arguments[0].name, "id");
    assert_eq!(user.arguments[0].value, ast::Value::Int("4".to_string()));
    assert_eq!(
        user.argument("name").map(|a| &a.value),
        Some(&ast::Value::String("x".to_string())),
    );
    assert_eq!(
        user.argument("admin").map(|a| &a.value),
        Some(&ast::Value::Boolean(true)),
    );
    assert!(user.argument("missing").is_none());
}

#[test]
fn test_arguments_without_commas() {
    let doc = parse_ok("{ f(a: 1 b: 2) }");
    let f = first_field(&first_operation(&doc).selection_set);
    let names: Vec<_> = f.arguments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_argument_with_variable() {
    let doc = parse_ok("query ($id: ID) { user(id: $id) }");
    let f = first_field(&first_operation(&doc).selection_set);
    assert_eq!(f.arguments[0].value, ast::Value::Variable("id".to_string()));
}
