//! Lexers feeding [`GraphQLParser`](crate::GraphQLParser).
//!
//! Any iterator of [`GraphQLToken`](crate::token::GraphQLToken)s can drive
//! the parser, so a hand-built token list works as well as lexed text:
//!
//! ```
//! use minigql_parser::ByteSpan;
//! use minigql_parser::GraphQLParser;
//! use minigql_parser::token::GraphQLToken;
//! use minigql_parser::token::GraphQLTokenKind;
//! use std::borrow::Cow;
//!
//! let tokens = vec![
//!     GraphQLToken::new(GraphQLTokenKind::CurlyBraceOpen, ByteSpan::default()),
//!     GraphQLToken::new(GraphQLTokenKind::Name(Cow::Borrowed("hello")), ByteSpan::default()),
//!     GraphQLToken::new(GraphQLTokenKind::CurlyBraceClose, ByteSpan::default()),
//!     GraphQLToken::new(GraphQLTokenKind::Eof, ByteSpan::default()),
//! ];
//! let result = GraphQLParser::from_token_source(tokens.into_iter()).parse_document();
//! assert!(!result.has_errors());
//! assert_eq!(result.ast().definitions.len(), 1);
//! ```

mod graphql_token_source;
mod str_to_graphql_token_source;

pub use graphql_token_source::GraphQLTokenSource;
pub use str_to_graphql_token_source::StrGraphQLTokenSource;
