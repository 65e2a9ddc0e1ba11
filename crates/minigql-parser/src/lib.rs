//! A small, fault-tolerant parsing library for a GraphQL-like query
//! language: operations (`query`, `mutation`, `subscription`) with
//! variables, arguments and nested selection sets, plus simple `type`
//! definitions.
//!
//! Parsing never fails outright. Malformed input degrades into partial AST
//! nodes or [`ast::Value::Illegal`] values, and each degradation is recorded
//! as a [`GraphQLParseError`] on the returned [`ParseResult`].
//!
//! ```
//! use minigql_parser::GraphQLParser;
//! use minigql_parser::ast;
//!
//! let result = GraphQLParser::new("{ hello }").parse_document();
//! assert!(!result.has_errors());
//!
//! let doc = result.into_ast();
//! assert!(matches!(doc.definitions[0], ast::Definition::Operation(_)));
//! ```

pub mod ast;
mod byte_span;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_token_stream;
mod parse_result;
pub mod token;
pub mod token_source;

pub use byte_span::ByteSpan;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser::MAX_RECURSION_DEPTH;
pub use graphql_parser::MAX_SKIP_ITERATIONS;
pub use graphql_token_stream::GraphQLTokenStream;
pub use parse_result::ParseResult;

/// Convenience wrapper around [`GraphQLParser::parse_document`] for string
/// input.
pub fn parse(source: &str) -> ParseResult<ast::Document> {
    GraphQLParser::new(source).parse_document()
}

#[cfg(test)]
mod tests;
