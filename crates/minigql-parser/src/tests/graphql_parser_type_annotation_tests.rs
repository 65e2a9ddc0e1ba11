//! Tests for type annotations on variable definitions.

use crate::ast;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse;
use crate::tests::utils::parse_ok;

fn parse_var_type(type_source: &str) -> Option<ast::TypeAnnotation> {
    let source = format!("query ($v: {type_source}) {{ f }}");
    let doc = parse_ok(&source);
    first_operation(&doc).variable_definitions[0]
        .type_annotation
        .clone()
}

#[test]
fn test_named_types() {
    let nullable = parse_var_type("String");
    assert_eq!(
        nullable,
        Some(ast::TypeAnnotation::named("String", ast::Nullability::Nullable)),
    );

    let non_null = parse_var_type("String!");
    assert!(non_null.as_ref().is_some_and(|t| t.is_non_null()));
    assert_eq!(non_null.as_ref().and_then(|t| t.name()), Some("String"));
}

/// `[String!]!` is a non-null list whose element is a non-null `String`.
#[test]
fn test_non_null_list_of_non_null() {
    let Some(annotation) = parse_var_type("[String!]!") else {
        panic!("Expected a type annotation");
    };
    assert!(annotation.is_list());
    assert!(annotation.is_non_null());
    assert_eq!(annotation.name(), None);

    let Some(elem) = annotation.elem() else {
        panic!("Expected a list element type");
    };
    assert!(!elem.is_list());
    assert!(elem.is_non_null());
    assert_eq!(elem.name(), Some("String"));
    assert_eq!(elem.elem(), None);
}

#[test]
fn test_nested_lists() {
    let Some(annotation) = parse_var_type("[[Int]!]") else {
        panic!("Expected a type annotation");
    };
    assert_eq!(annotation.to_string(), "[[Int]!]");
    assert!(!annotation.is_non_null());
    assert_eq!(annotation.innermost_name(), Some("Int"));

    let inner = annotation.elem();
    assert!(inner.is_some_and(|t| t.is_list() && t.is_non_null()));
}

#[test]
fn test_display_round_trips_source_form() {
    for source in ["ID", "ID!", "[ID]", "[ID!]", "[ID]!", "[[ID!]!]!"] {
        let annotation = parse_var_type(source);
        assert_eq!(annotation.map(|t| t.to_string()).as_deref(), Some(source));
    }
}

#[test]
fn test_missing_type_after_colon() {
    let result = parse("query ($v: ) { f }");
    assert_eq!(result.errors.len(), 1);
    let doc = result.ast();
    let var = &first_operation(doc).variable_definitions[0];
    assert_eq!(var.variable, "v");
    assert_eq!(var.type_annotation, None);
}

#[test]
fn test_unclosed_list_type() {
    let result = parse("query ($v: [Int) { f }");
    assert!(result.has_errors());
    let doc = result.ast();
    let var = &first_operation(doc).variable_definitions[0];
    assert_eq!(var.type_annotation.as_ref().map(|t| t.to_string()).as_deref(), Some("[Int]"));
    // The operation's selection set still parses.
    assert_eq!(first_operation(doc).selection_set.fields().count(), 1);
}

/// `[]` keeps its list node; only the element type is missing.
#[test]
fn test_list_type_without_element_type() {
    let result = parse("query ($v: []!) { f }");
    assert_eq!(result.errors.len(), 1);
    let doc = result.ast();
    let Some(annotation) = &first_operation(doc).variable_definitions[0].type_annotation else {
        panic!("Expected a list type annotation");
    };
    assert!(annotation.is_list());
    assert!(annotation.is_non_null());
    assert_eq!(annotation.elem(), None);
    assert_eq!(annotation.innermost_name(), None);
    assert_eq!(annotation.to_string(), "[]!");
    assert_eq!(first_operation(doc).selection_set.fields().count(), 1);
}
