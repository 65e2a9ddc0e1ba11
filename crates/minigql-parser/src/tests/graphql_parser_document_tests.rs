//! Document-level parsing tests.

use crate::ast;
use crate::tests::utils::first_operation;
use crate::tests::utils::mock_name_token;
use crate::tests::utils::mock_token;
use crate::tests::utils::parse;
use crate::tests::utils::parse_ok;
use crate::tests::utils::MockTokenSource;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParser;

#[test]
fn test_empty_document() {
    let doc = parse_ok("");
    assert!(doc.definitions.is_empty());
    assert!(doc.first_definition().is_none());

    let doc = parse_ok(" \n\t ");
    assert!(doc.definitions.is_empty());
}

/// Tokens that cannot start a definition are skipped one at a time; each
/// skip is reported.
#[test]
fn test_unrecognized_top_level_tokens_are_skipped() {
    let result = parse("foo 12 ) { a }");
    assert_eq!(result.errors.len(), 3);
    let doc = result.ast();
    assert_eq!(doc.definitions.len(), 1);
    assert_eq!(first_operation(doc).selection_set.fields().count(), 1);
}

#[test]
fn test_first_definition() {
    let doc = parse_ok("type T { a: Int } { a }");
    assert!(matches!(doc.first_definition(), Some(ast::Definition::Type(_))));
    assert_eq!(doc.operations().count(), 1);
}

#[test]
fn test_parse_from_token_source() {
    // query Q { hello }
    let tokens = vec![
        mock_name_token("query"),
        mock_name_token("Q"),
        mock_token(GraphQLTokenKind::CurlyBraceOpen),
        mock_name_token("hello"),
        mock_token(GraphQLTokenKind::CurlyBraceClose),
        mock_token(GraphQLTokenKind::Eof),
    ];
    let result = GraphQLParser::from_token_source(MockTokenSource::new(tokens))
        .parse_document();
    assert!(!result.has_errors());
    let doc = result.into_ast();
    let op = first_operation(&doc);
    assert_eq!(op.name.as_deref(), Some("Q"));
    assert_eq!(op.selection_set.fields().next().map(|f| f.name.as_str()), Some("hello"));
}

#[test]
fn test_parse_convenience_function() {
    let result = crate::parse("{ a }");
    assert!(result.valid_ast().is_some());
}

/// The AST serializes with `serde` for tooling output.
#[test]
fn test_document_serializes_to_json() {
    let doc = parse_ok("query Q($id: ID!) { user(id: $id) { name } }");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["definitions"][0]["Operation"]["operation"], "query");
    assert_eq!(json["definitions"][0]["Operation"]["name"], "Q");
    assert_eq!(
        json["definitions"][0]["Operation"]["selection_set"]["selections"][0]["Field"]["name"],
        "user",
    );

    let round_tripped: ast::Document =
        serde_json::from_value(json).unwrap();
    assert_eq!(round_tripped, doc);
}
