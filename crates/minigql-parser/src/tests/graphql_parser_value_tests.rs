//! Tests for value parsing.

use crate::ast;
use crate::tests::utils::first_arg_value;
use crate::tests::utils::parse;
use crate::tests::utils::parse_arg_value;
use indexmap::IndexMap;

#[test]
fn test_int_keeps_raw_text() {
    assert_eq!(parse_arg_value("42"), ast::Value::Int("42".to_string()));
    // Not range-checked at parse time.
    assert_eq!(
        parse_arg_value("99999999999999999999999"),
        ast::Value::Int("99999999999999999999999".to_string()),
    );
}

#[test]
fn test_string_value() {
    assert_eq!(
        parse_arg_value(r#""hello""#),
        ast::Value::String("hello".to_string()),
    );
}

#[test]
fn test_boolean_values() {
    assert_eq!(parse_arg_value("true"), ast::Value::Boolean(true));
    assert_eq!(parse_arg_value("false"), ast::Value::Boolean(false));
}

/// Any other name is an enum value, including `null` and `True`.
#[test]
fn test_enum_values() {
    assert_eq!(parse_arg_value("ADMIN"), ast::Value::Enum("ADMIN".to_string()));
    assert_eq!(parse_arg_value("null"), ast::Value::Enum("null".to_string()));
    assert_eq!(parse_arg_value("True"), ast::Value::Enum("True".to_string()));
}

#[test]
fn test_variable_value() {
    assert_eq!(parse_arg_value("$input"), ast::Value::Variable("input".to_string()));
}

#[test]
fn test_array_value_preserves_order() {
    assert_eq!(
        parse_arg_value("[1, 2, 3]"),
        ast::Value::Array(vec![
            ast::Value::Int("1".to_string()),
            ast::Value::Int("2".to_string()),
            ast::Value::Int("3".to_string()),
        ]),
    );
}

#[test]
fn test_empty_array_and_object() {
    assert_eq!(parse_arg_value("[]"), ast::Value::Array(vec![]));
    assert_eq!(parse_arg_value("{}"), ast::Value::Object(IndexMap::new()));
}

#[test]
fn test_object_value_preserves_key_order() {
    let value = parse_arg_value(r#"{ zeta: 1, alpha: "a", mid: [true] }"#);
    let ast::Value::Object(fields) = &value else {
        panic!("Expected Object value, got: {value:?}");
    };
    let keys: Vec<_> = fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    assert_eq!(
        fields.get("mid"),
        Some(&ast::Value::Array(vec![ast::Value::Boolean(true)])),
    );
}

#[test]
fn test_nested_values() {
    let value = parse_arg_value("{ list: [{ a: $x }, []], obj: { b: B } }");
    let mut inner = IndexMap::new();
    inner.insert("a".to_string(), ast::Value::Variable("x".to_string()));
    let mut obj = IndexMap::new();
    obj.insert("b".to_string(), ast::Value::Enum("B".to_string()));
    let mut expected = IndexMap::new();
    expected.insert(
        "list".to_string(),
        ast::Value::Array(vec![ast::Value::Object(inner), ast::Value::Array(vec![])]),
    );
    expected.insert("obj".to_string(), ast::Value::Object(obj));
    assert_eq!(value, ast::Value::Object(expected));
}

// =============================================================================
// Malformed values
// =============================================================================

/// `$` with no following name yields a variable with an empty name.
#[test]
fn test_dollar_without_name() {
    let result = parse("{ f(a: $) }");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        first_arg_value(result.ast()),
        ast::Value::Variable(String::new()),
    );
}

#[test]
fn test_object_missing_key_is_illegal() {
    let result = parse("{ f(a: { 1: 2 }) { x } }");
    assert!(result.has_errors());
    assert_eq!(
        first_arg_value(result.ast()),
        ast::Value::Illegal("expected object key".to_string()),
    );
}

#[test]
fn test_object_missing_colon_is_illegal() {
    let result = parse("{ f(a: { k 2 }) { x } }");
    assert!(result.has_errors());
    let doc = result.ast();
    assert_eq!(
        first_arg_value(doc),
        ast::Value::Illegal("expected colon in object".to_string()),
    );
    // The rest of the object was skipped; the field's selection set is
    // still intact.
    let field = crate::tests::utils::first_field(
        &crate::tests::utils::first_operation(doc).selection_set,
    );
    assert!(field.selection_set.is_some());
}

/// An unusable token in value position becomes `Illegal` with the token's
/// text.
#[test]
fn test_illegal_token_value() {
    let result = parse("{ f(a: #) }");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(first_arg_value(result.ast()), ast::Value::Illegal("#".to_string()));

    let result = parse("{ f(a: =) }");
    assert_eq!(first_arg_value(result.ast()), ast::Value::Illegal("=".to_string()));
}

/// A missing value in front of `)` is reported without eating the `)`.
#[test]
fn test_missing_value_before_close_paren() {
    let result = parse("{ f(a: ) g }");
    assert_eq!(result.errors.len(), 1);
    let doc = result.ast();
    assert_eq!(first_arg_value(doc), ast::Value::Illegal("expected value".to_string()));
    let names: Vec<_> = crate::tests::utils::first_operation(doc)
        .selection_set
        .fields()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["f", "g"]);
}

#[test]
fn test_missing_colon_after_argument_name() {
    let result = parse("{ f(a 1) }");
    assert!(result.has_errors());
    let value = first_arg_value(result.ast());
    assert_eq!(
        value,
        ast::Value::Illegal("expected `:` after argument name".to_string()),
    );
}
