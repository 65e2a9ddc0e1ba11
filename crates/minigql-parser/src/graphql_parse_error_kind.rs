/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// The full human-readable message lives in `GraphQLParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query { user(id 1) }
    ///                 ^ expected `:`, found integer `1`
    /// ```
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        /// What tokens were expected (e.g. `["`:`"]`).
        expected: Vec<String>,
        /// Description of what was found.
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when EOF was encountered.
        expected: Vec<String>,
    },

    /// A delimiter was opened but EOF was reached before the matching
    /// closing delimiter.
    ///
    /// # Example
    /// ```text
    /// query { user {
    /// # EOF here: missing `}`
    /// ```
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        /// The unclosed delimiter (e.g. `"{"`, `"["`, `"("`).
        delimiter: String,
    },

    /// A closing delimiter that doesn't match the innermost open one.
    ///
    /// # Example
    /// ```text
    /// query { user(ids: [1, 2)) }
    ///                        ^ expected `]`, found `)`
    /// ```
    #[error("mismatched delimiter")]
    MismatchedDelimiter {
        /// The expected closing delimiter (e.g. `"]"`).
        expected: String,
        /// The closing delimiter actually found (e.g. `")"`).
        found: String,
    },

    /// The lexer produced an `Illegal` token.
    #[error("illegal character: `{character}`")]
    IllegalCharacter {
        character: String,
    },

    /// Nesting exceeded the parser's recursion limit. The offending subtree
    /// is skipped.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// A loop ran past the parser's iteration budget. The construct is
    /// truncated where the budget ran out.
    #[error("iteration limit exceeded")]
    IterationLimitExceeded,
}
