//! Result type for parsing operations that may produce partial results.

use crate::GraphQLParseError;

/// The result of a parsing operation.
///
/// Parsing in this crate always produces an AST: malformed input degrades
/// into partial nodes rather than aborting. `ParseResult` pairs that AST with
/// the errors recorded while recovering, so callers choose between strict
/// and best-effort handling.
///
/// - [`valid_ast()`](Self::valid_ast) returns the AST only if there were no
///   errors.
/// - [`ast()`](Self::ast) returns the AST regardless.
///
/// # Example
///
/// ```
/// # use minigql_parser::GraphQLParser;
/// let source = "query { user(id 1) { name } }";
/// let result = GraphQLParser::new(source).parse_document();
///
/// // Strict mode rejects the recovered document...
/// assert!(result.valid_ast().is_none());
///
/// // ...while best-effort mode still sees the operation.
/// assert_eq!(result.ast().operations().count(), 1);
///
/// for error in &result.errors {
///     eprintln!("{}", error.format_detailed(Some(source)));
/// }
/// ```
#[derive(Debug)]
pub struct ParseResult<TAst> {
    ast: TAst,

    /// Errors encountered during parsing. Empty if parsing was completely
    /// successful.
    pub errors: Vec<GraphQLParseError>,
}

impl<TAst> ParseResult<TAst> {
    pub(crate) fn new(ast: TAst, errors: Vec<GraphQLParseError>) -> Self {
        Self { ast, errors }
    }

    /// Returns the AST only if parsing was completely successful (no errors).
    pub fn valid_ast(&self) -> Option<&TAst> {
        if self.errors.is_empty() {
            Some(&self.ast)
        } else {
            None
        }
    }

    /// Returns the AST, whether or not errors occurred.
    pub fn ast(&self) -> &TAst {
        &self.ast
    }

    /// Takes ownership of the AST only if parsing was completely successful.
    pub fn into_valid_ast(self) -> Option<TAst> {
        if self.errors.is_empty() {
            Some(self.ast)
        } else {
            None
        }
    }

    /// Takes ownership of the AST regardless of errors.
    pub fn into_ast(self) -> TAst {
        self.ast
    }

    /// Splits this result into its AST and errors.
    pub fn into_parts(self) -> (TAst, Vec<GraphQLParseError>) {
        (self.ast, self.errors)
    }

    /// Returns `true` if any errors were encountered during parsing.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Formats all errors as a single string for display.
    pub fn format_errors(&self, source: Option<&str>) -> String {
        self.errors
            .iter()
            .map(|e| e.format_detailed(source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<TAst> From<ParseResult<TAst>> for Result<TAst, Vec<GraphQLParseError>> {
    /// Converts to a standard `Result`, treating recovered ASTs as errors.
    fn from(result: ParseResult<TAst>) -> Self {
        if result.errors.is_empty() {
            Ok(result.ast)
        } else {
            Err(result.errors)
        }
    }
}
