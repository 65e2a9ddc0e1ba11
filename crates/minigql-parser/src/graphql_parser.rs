//! Recursive descent parser for minigql documents.
//!
//! This module provides [`GraphQLParser`], a generic parser that works with
//! any token source implementing [`GraphQLTokenSource`].
//!
//! # Error Recovery
//!
//! The parser never gives up on a document. When it meets something it
//! cannot use, it records a [`GraphQLParseError`] and degrades locally:
//!
//! - an unusable token inside a block is reported and skipped;
//! - a malformed value becomes [`ast::Value::Illegal`];
//! - a missing closing delimiter is reported and the partial node is kept.
//!
//! Every loop consumes at least one token per iteration (or exits), and is
//! additionally capped at [`MAX_SKIP_ITERATIONS`] iterations. Nesting of
//! values, selection sets and list types is capped at
//! [`MAX_RECURSION_DEPTH`]; deeper subtrees are skipped.

use crate::ast;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLTokenStream;
use crate::ParseResult;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use indexmap::IndexMap;

/// Maximum nesting depth for values, selection sets and list type
/// annotations.
pub const MAX_RECURSION_DEPTH: usize = 64;

/// Maximum number of iterations of any single parse or skip loop.
pub const MAX_SKIP_ITERATIONS: usize = 10_000;

// =============================================================================
// Delimiter tracking for error messages
// =============================================================================

/// Context in which a delimiter was opened, for error messages.
#[derive(Debug, Clone, Copy)]
enum DelimiterContext {
    /// `(name: Type)` on a field of a type definition
    ArgumentDefinitions,
    /// `(arg: value)` in field arguments
    FieldArguments,
    /// `[Type]` in type annotations
    ListType,
    /// `[value, ...]` in list literals
    ListValue,
    /// `{ field: value }` in object literals
    ObjectValue,
    /// `{ field ... }` in operations
    SelectionSet,
    /// `type Foo { ... }`
    TypeDefinition,
    /// `($var: Type)` in operation variable definitions
    VariableDefinitions,
}

impl DelimiterContext {
    /// Returns a human-readable description of this context.
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::ArgumentDefinitions => "argument definitions",
            DelimiterContext::FieldArguments => "field arguments",
            DelimiterContext::ListType => "list type annotation",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectValue => "object value",
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::TypeDefinition => "type definition",
            DelimiterContext::VariableDefinitions => "variable definitions",
        }
    }

    /// The (opening, closing) delimiter pair for this context.
    fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            DelimiterContext::ArgumentDefinitions
            | DelimiterContext::FieldArguments
            | DelimiterContext::VariableDefinitions => ("(", ")"),
            DelimiterContext::ListType
            | DelimiterContext::ListValue => ("[", "]"),
            DelimiterContext::ObjectValue
            | DelimiterContext::SelectionSet
            | DelimiterContext::TypeDefinition => ("{", "}"),
        }
    }

    fn is_open(&self, kind: &GraphQLTokenKind<'_>) -> bool {
        kind.as_punctuator_str() == Some(self.delimiters().0)
    }

    fn is_close(&self, kind: &GraphQLTokenKind<'_>) -> bool {
        kind.as_punctuator_str() == Some(self.delimiters().1)
    }
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for minigql documents.
///
/// Generic over the token source so that pre-lexed or synthetic token
/// streams can be parsed the same way as text.
///
/// # Usage
///
/// ```
/// use minigql_parser::ast;
/// use minigql_parser::GraphQLParser;
///
/// let source = "type Query { hello: String }";
/// let result = GraphQLParser::new(source).parse_document();
///
/// let doc = result.valid_ast().unwrap();
/// assert!(matches!(doc.definitions[0], ast::Definition::Type(_)));
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    /// The underlying token stream with lookahead support.
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Accumulated parse errors.
    errors: Vec<GraphQLParseError>,

    /// Current nesting depth, shared by values, selection sets and list
    /// type annotations.
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    ///
    /// Accepts any type that can be referenced as a `str`, including `&str`
    /// and `&String`.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        let token_source = StrGraphQLTokenSource::new(source.as_ref());
        Self::from_token_source(token_source)
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Creates a new parser from a token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            errors: Vec::new(),
            recursion_depth: 0,
        }
    }

    /// Parses the whole token stream into a [`ast::Document`].
    ///
    /// Always produces a document. Tokens that cannot start a definition
    /// are skipped one at a time and reported.
    pub fn parse_document(mut self) -> ParseResult<ast::Document> {
        let mut definitions = Vec::new();
        let mut iterations = 0;
        while !self.token_stream.is_at_end() {
            if !self.check_iteration_budget(&mut iterations, "document") {
                break;
            }
            if let Some(definition) = self.parse_definition() {
                definitions.push(definition);
            }
        }
        ParseResult::new(ast::Document { definitions }, self.errors)
    }

    // =========================================================================
    // Error recording and recovery
    // =========================================================================

    fn record_error(&mut self, error: GraphQLParseError) {
        self.errors.push(error);
    }

    /// Records an error describing the next token, without consuming it.
    fn record_unexpected(&mut self, what: &str, expected: &[&str]) {
        let token = self.token_stream.peek().clone();
        let error = Self::unexpected_token_error(&token, what, expected);
        self.record_error(error);
    }

    /// Records an error describing the next token and consumes it (unless
    /// it is `Eof`).
    fn skip_unexpected(&mut self, what: &str, expected: &[&str]) {
        self.record_unexpected(what, expected);
        if !self.token_stream.is_at_end() {
            self.token_stream.consume();
        }
    }

    fn unexpected_token_error(
        token: &GraphQLToken<'src>,
        what: &str,
        expected: &[&str],
    ) -> GraphQLParseError {
        let expected: Vec<String> =
            expected.iter().map(|s| s.to_string()).collect();
        let kind = match &token.kind {
            GraphQLTokenKind::Eof => GraphQLParseErrorKind::UnexpectedEof {
                expected,
            },
            GraphQLTokenKind::Illegal(character) => {
                GraphQLParseErrorKind::IllegalCharacter {
                    character: character.to_string(),
                }
            },
            other => GraphQLParseErrorKind::UnexpectedToken {
                expected,
                found: other.to_string(),
            },
        };
        GraphQLParseError::new(
            format!("{what}, found {}", token.kind),
            token.span,
            kind,
        )
    }

    /// Counts one loop iteration. Returns `false` (after recording an
    /// error) once the loop has run [`MAX_SKIP_ITERATIONS`] times.
    fn check_iteration_budget(
        &mut self,
        iterations: &mut usize,
        construct: &str,
    ) -> bool {
        *iterations += 1;
        if *iterations <= MAX_SKIP_ITERATIONS {
            return true;
        }
        let span = self.token_stream.peek().span;
        self.record_error(GraphQLParseError::new(
            format!(
                "{construct} exceeds {MAX_SKIP_ITERATIONS} items; remaining \
                input of this {construct} was not parsed",
            ),
            span,
            GraphQLParseErrorKind::IterationLimitExceeded,
        ));
        false
    }

    /// Consumes the next token if it has the given punctuator kind.
    fn eat(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        let matched = self.token_stream.peek().kind.as_punctuator_str()
            == kind.as_punctuator_str();
        if matched && kind.is_punctuator() {
            self.token_stream.consume();
            return true;
        }
        false
    }

    /// Consumes the closing delimiter of `context`, or records why it is
    /// missing. A different closing delimiter is left in place for an
    /// enclosing construct to use.
    fn expect_closing(&mut self, context: DelimiterContext) {
        let token = self.token_stream.peek().clone();
        if context.is_close(&token.kind) {
            self.token_stream.consume();
            return;
        }

        let (open, close) = context.delimiters();
        let error = match &token.kind {
            GraphQLTokenKind::Eof => GraphQLParseError::new(
                format!("unclosed `{open}` in {}", context.description()),
                token.span,
                GraphQLParseErrorKind::UnclosedDelimiter {
                    delimiter: open.to_string(),
                },
            ),
            kind if kind.is_closing_delimiter() => GraphQLParseError::new(
                format!(
                    "expected `{close}` to close {}, found {kind}",
                    context.description(),
                ),
                token.span,
                GraphQLParseErrorKind::MismatchedDelimiter {
                    expected: close.to_string(),
                    found: kind.literal().to_string(),
                },
            ),
            _ => Self::unexpected_token_error(
                &token,
                &format!("expected `{close}`"),
                &[close],
            ),
        };
        self.record_error(error);
    }

    /// Consumes tokens until the delimiter of `context` that is `depth`
    /// levels deep is closed. With `depth == 0` the next token is expected
    /// to be the opening delimiter.
    fn skip_until_closed(&mut self, context: DelimiterContext, mut depth: usize) {
        let mut iterations = 0;
        loop {
            if self.token_stream.is_at_end() {
                let (open, _) = context.delimiters();
                let span = self.token_stream.peek().span;
                self.record_error(GraphQLParseError::new(
                    format!("unclosed `{open}` in {}", context.description()),
                    span,
                    GraphQLParseErrorKind::UnclosedDelimiter {
                        delimiter: open.to_string(),
                    },
                ));
                return;
            }
            if !self.check_iteration_budget(&mut iterations, context.description()) {
                return;
            }
            let token = self.token_stream.consume();
            if context.is_open(&token.kind) {
                depth += 1;
            } else if context.is_close(&token.kind) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
        }
    }

    /// Checks recursion depth and returns an error if the limit is
    /// exceeded. On success, increments the depth counter; the caller must
    /// call `exit_recursion()` when done.
    ///
    /// On failure the subtree starting at the next token is skipped.
    fn enter_recursion(&mut self) -> Result<(), ()> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            let span = self.token_stream.peek().span;
            self.record_error(GraphQLParseError::new(
                format!("maximum nesting depth of {MAX_RECURSION_DEPTH} exceeded"),
                span,
                GraphQLParseErrorKind::RecursionLimitExceeded,
            ));
            self.skip_subtree();
            return Err(());
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    /// Skips the next token, or the whole delimited group it opens.
    fn skip_subtree(&mut self) {
        match self.token_stream.peek().kind {
            GraphQLTokenKind::CurlyBraceOpen => {
                self.skip_until_closed(DelimiterContext::SelectionSet, 0)
            },
            GraphQLTokenKind::ParenOpen => {
                self.skip_until_closed(DelimiterContext::FieldArguments, 0)
            },
            GraphQLTokenKind::SquareBracketOpen => {
                self.skip_until_closed(DelimiterContext::ListValue, 0)
            },
            GraphQLTokenKind::Eof => (),
            _ => {
                self.token_stream.consume();
            },
        }
    }

    /// Takes the text of a `Name` token, consuming it. Returns `None` (and
    /// consumes nothing) if the next token is not a name.
    fn take_name(&mut self) -> Option<String> {
        match &self.token_stream.peek().kind {
            GraphQLTokenKind::Name(name) => {
                let name = name.to_string();
                self.token_stream.consume();
                Some(name)
            },
            _ => None,
        }
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> Option<ast::Definition> {
        let kind = &self.token_stream.peek().kind;
        let starts_operation = match kind {
            GraphQLTokenKind::CurlyBraceOpen => true,
            GraphQLTokenKind::Name(name) => {
                ast::OperationKind::from_keyword(name).is_some()
            },
            _ => false,
        };
        let starts_type = kind.is_name("type");

        if starts_operation {
            return Some(ast::Definition::Operation(
                self.parse_operation_definition(),
            ));
        }
        if starts_type {
            return self.parse_type_definition().map(ast::Definition::Type);
        }

        self.skip_unexpected(
            "expected a definition",
            &["query", "mutation", "subscription", "type", "{"],
        );
        None
    }

    /// Parses `type Name { field(args): Type, ... }`.
    ///
    /// Returns `None` when `type` is not followed by a name; a following
    /// `{ ... }` block is skipped in that case.
    fn parse_type_definition(&mut self) -> Option<ast::TypeDefinition> {
        let next_is_name = matches!(
            self.token_stream.peek_nth(1).kind,
            GraphQLTokenKind::Name(_),
        );
        // `type`
        self.token_stream.consume();

        if !next_is_name {
            self.record_unexpected("expected type name after `type`", &["name"]);
            if matches!(self.token_stream.peek().kind, GraphQLTokenKind::CurlyBraceOpen) {
                self.skip_until_closed(DelimiterContext::TypeDefinition, 0);
            }
            return None;
        }
        let name = self.take_name()?;

        let mut fields = Vec::new();
        if !self.eat(&GraphQLTokenKind::CurlyBraceOpen) {
            self.record_unexpected(
                &format!("expected `{{` to begin type `{name}`"),
                &["{"],
            );
            return Some(ast::TypeDefinition { name, fields });
        }

        let mut iterations = 0;
        loop {
            if !self.check_iteration_budget(&mut iterations, "type definition") {
                return Some(ast::TypeDefinition { name, fields });
            }
            match &self.token_stream.peek().kind {
                GraphQLTokenKind::CurlyBraceClose | GraphQLTokenKind::Eof => break,
                GraphQLTokenKind::Comma => {
                    self.token_stream.consume();
                },
                GraphQLTokenKind::Name(_) => {
                    if let Some(field) = self.parse_field_definition() {
                        fields.push(field);
                    }
                },
                _ => self.skip_unexpected("expected field definition", &["name"]),
            }
        }
        self.expect_closing(DelimiterContext::TypeDefinition);

        Some(ast::TypeDefinition { name, fields })
    }

    /// Parses `name(args): Type`, keeping only the name.
    fn parse_field_definition(&mut self) -> Option<ast::FieldDefinition> {
        let name = self.take_name()?;
        if matches!(self.token_stream.peek().kind, GraphQLTokenKind::ParenOpen) {
            self.skip_until_closed(DelimiterContext::ArgumentDefinitions, 0);
        }
        if self.eat(&GraphQLTokenKind::Colon) {
            self.parse_type_annotation();
        } else {
            self.record_unexpected(
                &format!("expected `:` after field `{name}`"),
                &[":"],
            );
        }
        Some(ast::FieldDefinition { name })
    }

    fn parse_operation_definition(&mut self) -> ast::OperationDefinition {
        let keyword = match &self.token_stream.peek().kind {
            GraphQLTokenKind::Name(name) => ast::OperationKind::from_keyword(name),
            _ => None,
        };

        let mut name = None;
        let mut variable_definitions = Vec::new();
        let operation = match keyword {
            Some(operation) => {
                self.token_stream.consume();
                name = self.take_name();
                if matches!(self.token_stream.peek().kind, GraphQLTokenKind::ParenOpen) {
                    variable_definitions = self.parse_variable_definitions();
                }
                operation
            },
            None => ast::OperationKind::Query,
        };

        let selection_set =
            if matches!(self.token_stream.peek().kind, GraphQLTokenKind::CurlyBraceOpen) {
                self.parse_selection_set()
            } else {
                self.record_unexpected(
                    &format!("expected `{{` to begin {operation} selection set"),
                    &["{"],
                );
                ast::SelectionSet::default()
            };

        ast::OperationDefinition {
            operation,
            name,
            variable_definitions,
            selection_set,
        }
    }

    /// Parses `($a: Type, $b: Type)`.
    fn parse_variable_definitions(&mut self) -> Vec<ast::VariableDefinition> {
        // `(`
        self.token_stream.consume();

        let mut definitions = Vec::new();
        let mut iterations = 0;
        loop {
            if !self.check_iteration_budget(&mut iterations, "variable definitions") {
                return definitions;
            }
            match &self.token_stream.peek().kind {
                GraphQLTokenKind::ParenClose | GraphQLTokenKind::Eof => break,
                GraphQLTokenKind::CurlyBraceOpen | GraphQLTokenKind::CurlyBraceClose => {
                    break;
                },
                GraphQLTokenKind::Comma => {
                    self.token_stream.consume();
                },
                GraphQLTokenKind::Dollar => {
                    self.token_stream.consume();
                    let Some(variable) = self.take_name() else {
                        self.record_unexpected(
                            "expected variable name after `$`",
                            &["name"],
                        );
                        continue;
                    };
                    let type_annotation = if self.eat(&GraphQLTokenKind::Colon) {
                        self.parse_type_annotation()
                    } else {
                        None
                    };
                    definitions.push(ast::VariableDefinition {
                        variable,
                        type_annotation,
                    });
                },
                _ => self.skip_unexpected("expected variable definition", &["$"]),
            }
        }
        self.expect_closing(DelimiterContext::VariableDefinitions);
        definitions
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    fn parse_type_annotation(&mut self) -> Option<ast::TypeAnnotation> {
        self.enter_recursion().ok()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> Option<ast::TypeAnnotation> {
        if self.eat(&GraphQLTokenKind::SquareBracketOpen) {
            let element_type = self.parse_type_annotation();
            self.expect_closing(DelimiterContext::ListType);
            let nullability = self.parse_nullability();
            return Some(ast::TypeAnnotation::list(element_type, nullability));
        }

        match self.take_name() {
            Some(name) => {
                let nullability = self.parse_nullability();
                Some(ast::TypeAnnotation::named(name, nullability))
            },
            None => {
                self.record_unexpected("expected type", &["name", "["]);
                None
            },
        }
    }

    fn parse_nullability(&mut self) -> ast::Nullability {
        if self.eat(&GraphQLTokenKind::Bang) {
            ast::Nullability::NonNull
        } else {
            ast::Nullability::Nullable
        }
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// Parses `{ field ... }`. The next token must be `{`.
    fn parse_selection_set(&mut self) -> ast::SelectionSet {
        if self.enter_recursion().is_err() {
            return ast::SelectionSet::default();
        }
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> ast::SelectionSet {
        // `{`
        self.token_stream.consume();

        let mut selections = Vec::new();
        let mut iterations = 0;
        loop {
            if !self.check_iteration_budget(&mut iterations, "selection set") {
                return ast::SelectionSet { selections };
            }
            match &self.token_stream.peek().kind {
                GraphQLTokenKind::CurlyBraceClose | GraphQLTokenKind::Eof => break,
                GraphQLTokenKind::Comma => {
                    self.token_stream.consume();
                },
                GraphQLTokenKind::Name(_) => {
                    if let Some(field) = self.parse_field() {
                        selections.push(ast::Selection::Field(field));
                    }
                },
                _ => self.skip_unexpected("expected field name", &["name"]),
            }
        }
        self.expect_closing(DelimiterContext::SelectionSet);

        ast::SelectionSet { selections }
    }

    fn parse_field(&mut self) -> Option<ast::Field> {
        let name = self.take_name()?;
        let arguments =
            if matches!(self.token_stream.peek().kind, GraphQLTokenKind::ParenOpen) {
                self.parse_arguments()
            } else {
                Vec::new()
            };
        let selection_set =
            if matches!(self.token_stream.peek().kind, GraphQLTokenKind::CurlyBraceOpen) {
                Some(self.parse_selection_set())
            } else {
                None
            };
        Some(ast::Field {
            name,
            arguments,
            selection_set,
        })
    }

    /// Parses `(name: value, ...)`. The next token must be `(`.
    fn parse_arguments(&mut self) -> Vec<ast::Argument> {
        // `(`
        self.token_stream.consume();

        let mut arguments = Vec::new();
        let mut iterations = 0;
        loop {
            if !self.check_iteration_budget(&mut iterations, "field arguments") {
                return arguments;
            }
            match &self.token_stream.peek().kind {
                GraphQLTokenKind::ParenClose | GraphQLTokenKind::Eof => break,
                // Unclosed `(`: leave the `}` to the enclosing selection set.
                GraphQLTokenKind::CurlyBraceClose => break,
                GraphQLTokenKind::Comma => {
                    self.token_stream.consume();
                },
                GraphQLTokenKind::Name(_) => {
                    let Some(name) = self.take_name() else {
                        break;
                    };
                    let value = if self.eat(&GraphQLTokenKind::Colon) {
                        self.parse_value()
                    } else {
                        let message = "expected `:` after argument name";
                        self.record_unexpected(message, &[":"]);
                        ast::Value::Illegal(message.to_string())
                    };
                    arguments.push(ast::Argument { name, value });
                },
                _ => self.skip_unexpected("expected argument name", &["name"]),
            }
        }
        self.expect_closing(DelimiterContext::FieldArguments);
        arguments
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value.
    ///
    /// Consumes at least one token unless the next token is a closing
    /// delimiter or `Eof`, in which case an `Illegal` value is returned and
    /// the token is left for the enclosing construct.
    fn parse_value(&mut self) -> ast::Value {
        if self.enter_recursion().is_err() {
            return ast::Value::Illegal("maximum nesting depth exceeded".to_string());
        }
        let result = self.parse_value_impl();
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self) -> ast::Value {
        let token = self.token_stream.peek().clone();
        match token.kind {
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object_value(),
            GraphQLTokenKind::SquareBracketOpen => self.parse_list_value(),
            GraphQLTokenKind::IntValue(raw) => {
                self.token_stream.consume();
                ast::Value::Int(raw.into_owned())
            },
            GraphQLTokenKind::StringValue(content) => {
                self.token_stream.consume();
                ast::Value::String(content.into_owned())
            },
            GraphQLTokenKind::Name(name) => {
                self.token_stream.consume();
                match &*name {
                    "true" => ast::Value::Boolean(true),
                    "false" => ast::Value::Boolean(false),
                    _ => ast::Value::Enum(name.into_owned()),
                }
            },
            GraphQLTokenKind::Dollar => {
                self.token_stream.consume();
                match self.take_name() {
                    Some(name) => ast::Value::Variable(name),
                    None => {
                        self.record_unexpected(
                            "expected variable name after `$`",
                            &["name"],
                        );
                        ast::Value::Variable(String::new())
                    },
                }
            },
            GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::SquareBracketClose => {
                self.record_unexpected("expected value", &["value"]);
                ast::Value::Illegal("expected value".to_string())
            },
            ref kind => {
                let literal = kind.literal().to_string();
                self.skip_unexpected("expected value", &["value"]);
                ast::Value::Illegal(literal)
            },
        }
    }

    /// Parses `[value, ...]`. The next token must be `[`.
    fn parse_list_value(&mut self) -> ast::Value {
        // `[`
        self.token_stream.consume();

        let mut values = Vec::new();
        let mut iterations = 0;
        loop {
            if !self.check_iteration_budget(&mut iterations, "list value") {
                return ast::Value::Array(values);
            }
            match &self.token_stream.peek().kind {
                GraphQLTokenKind::SquareBracketClose | GraphQLTokenKind::Eof => break,
                // Unclosed `[`: leave the delimiter to the enclosing construct.
                GraphQLTokenKind::ParenClose | GraphQLTokenKind::CurlyBraceClose => break,
                GraphQLTokenKind::Comma => {
                    self.token_stream.consume();
                },
                _ => values.push(self.parse_value()),
            }
        }
        self.expect_closing(DelimiterContext::ListValue);
        ast::Value::Array(values)
    }

    /// Parses `{ key: value, ... }`. The next token must be `{`.
    ///
    /// A missing key or colon abandons the object: the rest of it is
    /// skipped and an `Illegal` value describing the problem is returned.
    fn parse_object_value(&mut self) -> ast::Value {
        // `{`
        self.token_stream.consume();

        let mut fields = IndexMap::new();
        let mut iterations = 0;
        loop {
            if !self.check_iteration_budget(&mut iterations, "object value") {
                return ast::Value::Object(fields);
            }
            match &self.token_stream.peek().kind {
                GraphQLTokenKind::CurlyBraceClose | GraphQLTokenKind::Eof => break,
                GraphQLTokenKind::Comma => {
                    self.token_stream.consume();
                },
                GraphQLTokenKind::Name(_) => {
                    let Some(key) = self.take_name() else {
                        break;
                    };
                    if !self.eat(&GraphQLTokenKind::Colon) {
                        return self.abandon_object_value("expected colon in object", ":");
                    }
                    let value = self.parse_value();
                    fields.insert(key, value);
                },
                _ => return self.abandon_object_value("expected object key", "name"),
            }
        }
        self.expect_closing(DelimiterContext::ObjectValue);
        ast::Value::Object(fields)
    }

    fn abandon_object_value(&mut self, message: &str, expected: &str) -> ast::Value {
        self.record_unexpected(message, &[expected]);
        self.skip_until_closed(DelimiterContext::ObjectValue, 1);
        ast::Value::Illegal(message.to_string())
    }
}
