use crate::token::GraphQLToken;

/// A producer of [`GraphQLToken`]s, consumed one at a time by
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream), which owns all
/// lookahead.
///
/// Blanket-implemented for every matching [`Iterator`]. A source skips
/// whitespace itself, reports unrecognized input as
/// [`GraphQLTokenKind::Illegal`](crate::token::GraphQLTokenKind::Illegal)
/// rather than stopping, and ends with a single
/// [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof).
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, I> GraphQLTokenSource<'src> for I where I: Iterator<Item = GraphQLToken<'src>> {}
