use std::borrow::Cow;
use std::fmt;

/// The kind of a token.
///
/// Literal kinds (`Name`, `IntValue`, `StringValue`, `Illegal`) store only
/// the raw source text.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `StrGraphQLTokenSource`
/// borrows string slices directly from the source text using
/// `Cow::Borrowed`. Tokens built by hand (e.g. in tests) can use
/// `Cow::Owned` and a `'static` lifetime.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `;`
    Semicolon,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// An identifier. Keywords (`query`, `type`, ...), booleans and enum
    /// values are all lexed as names; the parser tells them apart.
    Name(Cow<'src, str>),

    /// Raw source text of a run of ASCII digits.
    IntValue(Cow<'src, str>),

    /// Contents of a double-quoted string, without the quotes.
    ///
    /// No escape processing is performed.
    StringValue(Cow<'src, str>),

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input.
    Eof,

    // =========================================================================
    // Lexer error (allows error recovery)
    // =========================================================================
    /// A character the lexer does not recognize. Carries the offending
    /// character so the parser can report it and keep going.
    Illegal(Cow<'src, str>),
}

impl<'src> GraphQLTokenKind<'src> {
    // =========================================================================
    // Helper constructors
    // =========================================================================

    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `Name` token from an owned `String`.
    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::IntValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn int_value_owned(s: String) -> Self {
        GraphQLTokenKind::IntValue(Cow::Owned(s))
    }

    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::StringValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn string_value_owned(s: String) -> Self {
        GraphQLTokenKind::StringValue(Cow::Owned(s))
    }

    #[inline]
    pub fn illegal_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Illegal(Cow::Borrowed(s))
    }

    // =========================================================================
    // Query methods
    // =========================================================================

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the punctuator character if this token is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::Comma => Some(","),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Semicolon => Some(";"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),
            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Illegal(_) => None,
        }
    }

    /// Returns `true` if this token closes a delimited construct.
    pub fn is_closing_delimiter(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::CurlyBraceClose
                | GraphQLTokenKind::ParenClose
                | GraphQLTokenKind::SquareBracketClose,
        )
    }

    /// Returns `true` if this is a `Name` token with exactly the given text.
    pub fn is_name(&self, expected: &str) -> bool {
        matches!(self, GraphQLTokenKind::Name(name) if name == expected)
    }

    /// Returns the literal text of this token: the raw text for literal
    /// kinds, the punctuator for punctuators, and `""` for `Eof`.
    pub fn literal(&self) -> &str {
        match self {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::StringValue(s)
            | GraphQLTokenKind::Illegal(s) => s.as_ref(),
            GraphQLTokenKind::Eof => "",
            other => other.as_punctuator_str().unwrap_or(""),
        }
    }

    /// Converts this kind into one that owns its text.
    pub fn into_owned(self) -> GraphQLTokenKind<'static> {
        match self {
            GraphQLTokenKind::Bang => GraphQLTokenKind::Bang,
            GraphQLTokenKind::Colon => GraphQLTokenKind::Colon,
            GraphQLTokenKind::Comma => GraphQLTokenKind::Comma,
            GraphQLTokenKind::CurlyBraceClose => GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::CurlyBraceOpen => GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Dollar => GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Equals => GraphQLTokenKind::Equals,
            GraphQLTokenKind::ParenClose => GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::ParenOpen => GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::Semicolon => GraphQLTokenKind::Semicolon,
            GraphQLTokenKind::SquareBracketClose => GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::SquareBracketOpen => GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::Name(s) => GraphQLTokenKind::Name(Cow::Owned(s.into_owned())),
            GraphQLTokenKind::IntValue(s) => GraphQLTokenKind::IntValue(Cow::Owned(s.into_owned())),
            GraphQLTokenKind::StringValue(s) => {
                GraphQLTokenKind::StringValue(Cow::Owned(s.into_owned()))
            },
            GraphQLTokenKind::Eof => GraphQLTokenKind::Eof,
            GraphQLTokenKind::Illegal(s) => GraphQLTokenKind::Illegal(Cow::Owned(s.into_owned())),
        }
    }
}

/// Human-readable rendering used in diagnostics, e.g. `` `{` ``,
/// `` name `user` ``, or `end of input`.
impl fmt::Display for GraphQLTokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphQLTokenKind::Name(s) => write!(f, "name `{s}`"),
            GraphQLTokenKind::IntValue(s) => write!(f, "integer `{s}`"),
            GraphQLTokenKind::StringValue(s) => write!(f, "string \"{s}\""),
            GraphQLTokenKind::Eof => write!(f, "end of input"),
            GraphQLTokenKind::Illegal(s) => write!(f, "illegal character `{s}`"),
            punctuator => write!(f, "`{}`", punctuator.literal()),
        }
    }
}
