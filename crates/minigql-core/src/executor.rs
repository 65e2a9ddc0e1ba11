//! Executes parsed operations against a [`ResolverRegistry`].
//!
//! Only the first definition of a document is executed, and only if it is
//! an operation. Root fields are dispatched to registered resolvers (the
//! query map first, then the mutation map). Nested fields are read
//! reflectively from the record-shaped value their parent resolved to. A
//! nested selection on a list applies to every element.
//!
//! Execution is synchronous, recursive and in declaration order, and it
//! stops at the first fault.

use crate::argument_builder;
use crate::execution_error::ExecutionError;
use crate::executor_config::ExecutorConfig;
use crate::resolver::Resolver;
use crate::resolver_registry::ResolverRegistry;
use crate::response::Response;
use crate::subscription::SubscriptionStream;
use crate::value::Arguments;
use crate::value::Value;
use crate::variables::Variables;
use indexmap::IndexMap;
use minigql_parser::ast;
use minigql_parser::ast::OperationKind;
use minigql_parser::ParseResult;
use std::sync::Arc;

/// Where the value of a field comes from.
#[derive(Clone, Debug)]
pub enum FieldSource<'a> {
    /// A root field served by a registered resolver.
    RegisteredResolver(Resolver),
    /// A nested field read from its parent value.
    ReflectedRecord(&'a Value),
}

#[derive(Clone, Debug)]
pub struct Executor {
    registry: Arc<ResolverRegistry>,
    config: ExecutorConfig,
}

impl Executor {
    pub fn new(registry: Arc<ResolverRegistry>) -> Self {
        Self::with_config(registry, ExecutorConfig::default())
    }

    pub fn with_config(registry: Arc<ResolverRegistry>, config: ExecutorConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<ResolverRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    // =========================================================================
    // Queries and mutations
    // =========================================================================

    /// Parses `text` and executes the resulting document.
    ///
    /// Parse diagnostics do not stop execution: the best-effort document is
    /// executed and the diagnostics are logged.
    ///
    /// ```
    /// use minigql_core::Executor;
    /// use minigql_core::ResolverRegistry;
    /// use minigql_core::Value;
    /// use minigql_core::Variables;
    /// use std::sync::Arc;
    ///
    /// let registry = Arc::new(ResolverRegistry::new());
    /// registry.register_query("hello", |_, _| Ok(Value::from("world")));
    ///
    /// let executor = Executor::new(registry);
    /// let response = executor.execute("{ hello }", &Variables::new()).unwrap();
    /// assert_eq!(
    ///     serde_json::to_string(&response).unwrap(),
    ///     r#"{"data":{"hello":"world"}}"#,
    /// );
    /// ```
    pub fn execute(&self, text: &str, variables: &Variables) -> Result<Response, ExecutionError> {
        let result = minigql_parser::parse(text);
        log_parse_errors(&result, text);
        self.execute_document(result.ast(), variables)
    }

    pub fn execute_document(
        &self,
        document: &ast::Document,
        variables: &Variables,
    ) -> Result<Response, ExecutionError> {
        let definition = document
            .first_definition()
            .ok_or(ExecutionError::NoDefinitions)?;
        let ast::Definition::Operation(operation) = definition else {
            return Err(ExecutionError::UnsupportedDefinition);
        };

        log::debug!(
            "executing {} operation {}",
            operation.operation,
            operation.name.as_deref().unwrap_or("<anonymous>"),
        );
        let data = self.execute_selection_set(None, &operation.selection_set, variables)?;
        Ok(Response::new(data))
    }

    /// Decides where the value of `field_name` comes from: a registered
    /// query or mutation resolver at the root (`source` absent), or the
    /// parent value otherwise.
    pub fn field_source<'a>(
        &self,
        source: Option<&'a Value>,
        field_name: &str,
    ) -> Option<FieldSource<'a>> {
        match source {
            None => self
                .registry
                .lookup(OperationKind::Query, field_name)
                .or_else(|| self.registry.lookup(OperationKind::Mutation, field_name))
                .map(FieldSource::RegisteredResolver),
            Some(parent) => Some(FieldSource::ReflectedRecord(parent)),
        }
    }

    /// Resolves a single field against `source` (absent at the root).
    pub fn resolve_field(
        &self,
        source: Option<&Value>,
        field: &ast::Field,
        variables: &Variables,
    ) -> Result<Value, ExecutionError> {
        match self.field_source(source, &field.name) {
            Some(FieldSource::RegisteredResolver(resolver)) => {
                let args = self.build_args(field, variables)?;
                log::trace!("calling resolver for field `{}`", field.name);
                resolver
                    .call(source, &args)
                    .map_err(|source| ExecutionError::Resolver {
                        field: field.name.clone(),
                        source,
                    })
            },
            Some(FieldSource::ReflectedRecord(parent)) => reflect_resolve(parent, &field.name),
            None => Err(ExecutionError::ResolverNotFound {
                field: field.name.clone(),
            }),
        }
    }

    /// Resolves every field of `selection_set` in order, recursing into
    /// nested selections.
    pub fn execute_selection_set(
        &self,
        source: Option<&Value>,
        selection_set: &ast::SelectionSet,
        variables: &Variables,
    ) -> Result<IndexMap<String, Value>, ExecutionError> {
        self.execute_selection_set_at(source, selection_set, variables, 1)
    }

    /// Applies a nested selection set to a resolved value.
    ///
    /// `null` and scalars pass through unchanged, record-shaped values are
    /// narrowed to the selected fields, and lists are handled element by
    /// element.
    pub fn resolve_nested_selection(
        &self,
        resolved: Value,
        selection_set: &ast::SelectionSet,
        variables: &Variables,
    ) -> Result<Value, ExecutionError> {
        self.resolve_nested_selection_at(resolved, selection_set, variables, 1)
    }

    fn execute_selection_set_at(
        &self,
        source: Option<&Value>,
        selection_set: &ast::SelectionSet,
        variables: &Variables,
        depth: usize,
    ) -> Result<IndexMap<String, Value>, ExecutionError> {
        if depth > self.config.max_depth {
            return Err(ExecutionError::MaxDepthExceeded {
                max_depth: self.config.max_depth,
            });
        }

        let mut result = IndexMap::with_capacity(selection_set.selections.len());
        for field in selection_set.fields() {
            let resolved = self.resolve_field(source, field, variables)?;
            let value = match &field.selection_set {
                Some(nested) => {
                    self.resolve_nested_selection_at(resolved, nested, variables, depth + 1)?
                },
                None => resolved,
            };
            result.insert(field.name.clone(), value);
        }
        Ok(result)
    }

    fn resolve_nested_selection_at(
        &self,
        resolved: Value,
        selection_set: &ast::SelectionSet,
        variables: &Variables,
        depth: usize,
    ) -> Result<Value, ExecutionError> {
        if resolved.is_record_shaped() {
            let data =
                self.execute_selection_set_at(Some(&resolved), selection_set, variables, depth)?;
            return Ok(Value::Object(data));
        }

        match resolved {
            Value::List(items) => items
                .into_iter()
                .map(|item| {
                    self.resolve_nested_selection_at(item, selection_set, variables, depth)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            other => Ok(other),
        }
    }

    fn build_args(
        &self,
        field: &ast::Field,
        variables: &Variables,
    ) -> Result<Arguments, ExecutionError> {
        if self.config.strict_variables {
            argument_builder::build_args_strict(field, variables)
        } else {
            Ok(argument_builder::build_args(field, variables))
        }
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Calls the subscription resolver for `field` and takes the event
    /// stream it returns.
    pub fn execute_subscription(
        &self,
        source: Option<&Value>,
        field: &ast::Field,
        variables: &Variables,
    ) -> Result<SubscriptionStream, ExecutionError> {
        let resolver = self
            .registry
            .lookup(OperationKind::Subscription, &field.name)
            .ok_or_else(|| ExecutionError::SubscriptionResolverNotFound {
                field: field.name.clone(),
            })?;
        let args = self.build_args(field, variables)?;
        let result = resolver
            .call(source, &args)
            .map_err(|source| ExecutionError::Resolver {
                field: field.name.clone(),
                source,
            })?;

        let event_source = match result {
            Value::Stream(event_source) => event_source,
            other => {
                return Err(ExecutionError::NotStreamShaped {
                    field: field.name.clone(),
                    type_name: other.type_name(),
                });
            },
        };
        let stream = event_source
            .take()
            .ok_or_else(|| ExecutionError::StreamAlreadyTaken {
                field: field.name.clone(),
            })?;
        log::debug!("subscription `{}` started", field.name);
        Ok(stream)
    }

    /// Parses `text`, which must start with a `subscription` operation, and
    /// subscribes to that operation's first field.
    pub fn execute_subscription_query(
        &self,
        text: &str,
        variables: &Variables,
    ) -> Result<SubscriptionStream, ExecutionError> {
        let result = minigql_parser::parse(text);
        log_parse_errors(&result, text);

        let definition = result
            .ast()
            .first_definition()
            .ok_or(ExecutionError::NoDefinitions)?;
        let ast::Definition::Operation(operation) = definition else {
            return Err(ExecutionError::NotASubscription);
        };
        if operation.operation != OperationKind::Subscription {
            return Err(ExecutionError::NotASubscription);
        }
        let field = operation
            .selection_set
            .fields()
            .next()
            .ok_or(ExecutionError::EmptySubscription)?;
        self.execute_subscription(None, field, variables)
    }
}

/// Reads `field_name` from a record-shaped `source`.
///
/// Records match the first field (in declaration order) whose identifier or
/// tag name equals `field_name` case-insensitively. Objects prefer an exact
/// key and fall back to the first case-insensitive match.
pub fn reflect_resolve(source: &Value, field_name: &str) -> Result<Value, ExecutionError> {
    let found = match source {
        Value::Record(record) => record.lookup(field_name),
        Value::Object(map) => map
            .get(field_name)
            .or_else(|| {
                map.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(field_name))
                    .map(|(_, value)| value)
            })
            .cloned(),
        other => {
            return Err(ExecutionError::NotARecord {
                field: field_name.to_string(),
                type_name: other.type_name(),
            });
        },
    };
    found.ok_or_else(|| ExecutionError::FieldNotFound {
        field: field_name.to_string(),
        type_name: source.type_name(),
    })
}

fn log_parse_errors(result: &ParseResult<ast::Document>, text: &str) {
    if result.has_errors() {
        log::debug!(
            "executing best-effort document; {} parse error(s):\n{}",
            result.errors.len(),
            result.format_errors(Some(text)),
        );
    }
}
