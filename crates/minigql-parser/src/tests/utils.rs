//! Various test utils.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::ByteSpan;
use crate::GraphQLParser;
use crate::ParseResult;

pub fn parse(source: &str) -> ParseResult<ast::Document> {
    GraphQLParser::new(source).parse_document()
}

/// Parses `source`, asserting that no errors were recorded.
pub fn parse_ok(source: &str) -> ast::Document {
    let result = parse(source);
    assert!(
        !result.has_errors(),
        "Unexpected parse errors for {source:?}:\n{}",
        result.format_errors(Some(source)),
    );
    result.into_ast()
}

/// Returns the first operation definition of a document.
pub fn first_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    match doc.definitions.first() {
        Some(ast::Definition::Operation(op)) => op,
        other => panic!("Expected an operation definition, got: {other:?}"),
    }
}

/// Returns the first field of a selection set.
pub fn first_field(selection_set: &ast::SelectionSet) -> &ast::Field {
    selection_set
        .fields()
        .next()
        .unwrap_or_else(|| panic!("Expected a field in {selection_set:?}"))
}

/// Parses `query { field(arg: <value_source>) }` and returns the argument
/// value, asserting a clean parse.
pub fn parse_arg_value(value_source: &str) -> ast::Value {
    let source = format!("query {{ field(arg: {value_source}) }}");
    let doc = parse_ok(&source);
    first_arg_value(&doc)
}

/// Returns the value of the first argument of the first root field.
pub fn first_arg_value(doc: &ast::Document) -> ast::Value {
    let field = first_field(&first_operation(doc).selection_set);
    match field.arguments.first() {
        Some(argument) => argument.value.clone(),
        None => panic!("Expected an argument on {field:?}"),
    }
}

/// Creates a mock token with the given kind and an empty span.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    GraphQLToken::new(kind, ByteSpan::default())
}

pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}
