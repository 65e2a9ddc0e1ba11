//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Token values borrow directly from the source string using
//! `Cow::Borrowed`, avoiding allocations for names, numbers, and strings.
//!
//! # Recognized input
//!
//! - Punctuators: `= : , ; ( ) { } [ ] $ !`
//! - Double-quoted strings with no escape processing. An unterminated
//!   string runs to the end of input.
//! - Integers: runs of ASCII digits.
//! - Names: an ASCII letter or `_`, followed by ASCII letters, digits or
//!   `_`. Keywords, booleans and enum values are all names.
//! - Whitespace (space, tab, CR, LF) is skipped.
//!
//! Anything else produces an `Illegal` token covering exactly one
//! character, so the lexer never stalls and never splits a UTF-8 sequence.
//!
//! # Usage
//!
//! ```rust
//! use minigql_parser::token_source::StrGraphQLTokenSource;
//!
//! let lexer = StrGraphQLTokenSource::new("{ name }");
//! for token in lexer {
//!     println!("{:?}", token.kind);
//! }
//! // Output:
//! // CurlyBraceOpen
//! // Name("name")
//! // CurlyBraceClose
//! // Eof
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::ByteSpan;

/// A lexer over a `&str`.
///
/// The lexer is lazy, forward-only and not restartable. Once the input is
/// exhausted, [`next_token()`](Self::next_token) keeps returning `Eof`; the
/// [`Iterator`] view stops after yielding `Eof` once.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Whether the `Eof` token has been yielded through the `Iterator`
    /// interface.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            finished: false,
        }
    }

    /// Returns the byte at the current offset, if any.
    fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.curr_byte_offset).copied()
    }

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: usize,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(
            kind,
            ByteSpan::from_offsets(start, self.curr_byte_offset),
        )
    }

    /// Lexes and returns the next token.
    ///
    /// After the end of input this returns an `Eof` token on every call.
    pub fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_whitespace();

        let start = self.curr_byte_offset;
        let Some(byte) = self.peek_byte() else {
            return self.make_token(GraphQLTokenKind::Eof, start);
        };

        let punctuator = match byte {
            b'=' => Some(GraphQLTokenKind::Equals),
            b':' => Some(GraphQLTokenKind::Colon),
            b',' => Some(GraphQLTokenKind::Comma),
            b';' => Some(GraphQLTokenKind::Semicolon),
            b'(' => Some(GraphQLTokenKind::ParenOpen),
            b')' => Some(GraphQLTokenKind::ParenClose),
            b'{' => Some(GraphQLTokenKind::CurlyBraceOpen),
            b'}' => Some(GraphQLTokenKind::CurlyBraceClose),
            b'[' => Some(GraphQLTokenKind::SquareBracketOpen),
            b']' => Some(GraphQLTokenKind::SquareBracketClose),
            b'$' => Some(GraphQLTokenKind::Dollar),
            b'!' => Some(GraphQLTokenKind::Bang),
            _ => None,
        };
        if let Some(kind) = punctuator {
            self.curr_byte_offset += 1;
            return self.make_token(kind, start);
        }

        if byte == b'"' {
            return self.lex_string(start);
        }
        if is_name_start(byte) {
            return self.lex_name(start);
        }
        if byte.is_ascii_digit() {
            return self.lex_int(start);
        }

        self.lex_illegal(start)
    }

    // =========================================================================
    // Lexing helpers
    // =========================================================================

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek_byte() {
            self.curr_byte_offset += 1;
        }
    }

    /// Lexes a name: `[A-Za-z_][A-Za-z0-9_]*`.
    fn lex_name(&mut self, start: usize) -> GraphQLToken<'src> {
        let len = self
            .remaining()
            .bytes()
            .take_while(|b| is_name_continue(*b))
            .count();
        self.curr_byte_offset += len;
        let name = &self.source[start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::name_borrowed(name), start)
    }

    /// Lexes a run of ASCII digits.
    fn lex_int(&mut self, start: usize) -> GraphQLToken<'src> {
        let len = self
            .remaining()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        self.curr_byte_offset += len;
        let digits = &self.source[start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::int_value_borrowed(digits), start)
    }

    /// Lexes a double-quoted string starting at the opening quote.
    ///
    /// Content is taken verbatim up to the next `"`; escapes are not
    /// interpreted. An unterminated string consumes the rest of the input.
    fn lex_string(&mut self, start: usize) -> GraphQLToken<'src> {
        let content_start = start + 1;
        let rest = &self.source.as_bytes()[content_start..];
        let (content_end, next_offset) = match memchr::memchr(b'"', rest) {
            Some(idx) => (content_start + idx, content_start + idx + 1),
            None => (self.source.len(), self.source.len()),
        };
        self.curr_byte_offset = next_offset;
        let content = &self.source[content_start..content_end];
        self.make_token(GraphQLTokenKind::string_value_borrowed(content), start)
    }

    /// Emits an `Illegal` token for the single (possibly multi-byte)
    /// character at the current offset.
    fn lex_illegal(&mut self, start: usize) -> GraphQLToken<'src> {
        let ch_len = self
            .remaining()
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.curr_byte_offset += ch_len;
        let text = &self.source[start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::illegal_borrowed(text), start)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
