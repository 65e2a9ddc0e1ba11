use crate::token::GraphQLTokenKind;
use crate::ByteSpan;

/// A token together with the byte span it was lexed from.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token, carrying its literal text where relevant.
    pub kind: GraphQLTokenKind<'src>,

    /// The source location span of this token.
    pub span: ByteSpan,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(kind: GraphQLTokenKind<'src>, span: ByteSpan) -> Self {
        Self { kind, span }
    }

    /// Returns `true` if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, GraphQLTokenKind::Eof)
    }
}
