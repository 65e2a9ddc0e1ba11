//! Streaming lexer adapter that produces [`GraphQLToken`]s from some
//! [`GraphQLTokenSource`] with a bounded lookahead buffer.

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::ByteSpan;
use smallvec::SmallVec;

/// Streaming lexer adapter that produces [`GraphQLToken`]s given some
/// [`GraphQLTokenSource`] with a bounded lookahead buffer.
///
/// The parser never looks more than two tokens ahead (the current token and
/// the one after it), so the buffer is a [`SmallVec`] that stays inline.
///
/// Once the underlying source is exhausted the stream keeps handing out the
/// last `Eof` token it saw, so callers can peek and consume past the end
/// without special-casing it.
pub struct GraphQLTokenStream<
    'src,
    TTokenSource: GraphQLTokenSource<'src>,
> {
    token_source: TTokenSource,
    /// Unconsumed tokens, front first.
    buffer: SmallVec<[GraphQLToken<'src>; 2]>,
    /// The token returned once the source runs dry.
    eof: GraphQLToken<'src>,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>>
    GraphQLTokenStream<'src, TTokenSource>
{
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: SmallVec::new(),
            eof: GraphQLToken::new(GraphQLTokenKind::Eof, ByteSpan::default()),
        }
    }

    /// Advance to the next token and return it as an owned value.
    ///
    /// Returns a copy of the `Eof` token once the stream is exhausted.
    pub fn consume(&mut self) -> GraphQLToken<'src> {
        self.ensure_buffer_has(1);
        if self.buffer.is_empty() {
            self.eof.clone()
        } else {
            self.buffer.remove(0)
        }
    }

    /// Returns the number of [`GraphQLToken`]s currently buffered
    /// (unconsumed).
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Fill the buffer to ensure it has at least `count` unconsumed
    /// elements (or as many as the source can still provide).
    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => {
                    if token.is_eof() {
                        self.eof = token.clone();
                    }
                    self.buffer.push(token);
                },
                None => break,
            }
        }
    }

    /// Returns `true` if the next token is `Eof` (or the source is
    /// exhausted).
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_eof()
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> &GraphQLToken<'src> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from next unconsumed token).
    ///
    /// `peek_nth(0)` is equivalent to `peek()`. Positions past the end of
    /// input yield the `Eof` token.
    pub fn peek_nth(&mut self, n: usize) -> &GraphQLToken<'src> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n).unwrap_or(&self.eof)
    }
}
