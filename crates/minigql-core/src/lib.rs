//! Runtime for the minigql query language: a registry of root-field
//! resolvers, an executor that walks parsed operations against it, and a
//! bounded, cancellable event channel for subscriptions.
//!
//! Parsing lives in [`minigql_parser`]; this crate consumes its AST.

mod argument_builder;
mod execution_error;
mod executor;
mod executor_config;
mod record;
mod resolver;
mod resolver_registry;
mod response;
mod subscription;
mod value;
mod variables;

pub use argument_builder::build_args;
pub use argument_builder::build_args_strict;
pub use argument_builder::build_value;
pub use argument_builder::resolve_argument;
pub use execution_error::ExecutionError;
pub use execution_error::ExecutionErrorKind;
pub use executor::reflect_resolve;
pub use executor::Executor;
pub use executor::FieldSource;
pub use executor_config::ExecutorConfig;
pub use executor_config::DEFAULT_MAX_DEPTH;
pub use record::FieldDescriptor;
pub use record::Record;
pub use resolver::Resolver;
pub use resolver::ResolverError;
pub use resolver_registry::ResolverRegistry;
pub use response::Response;
pub use subscription::event_channel;
pub use subscription::EventSender;
pub use subscription::EventSource;
pub use subscription::SendError;
pub use subscription::SubscriptionStream;
pub use subscription::DEFAULT_EVENT_CHANNEL_CAPACITY;
pub use value::Arguments;
pub use value::Value;
pub use variables::Variables;

pub use minigql_parser::ast::OperationKind;

#[cfg(test)]
mod tests;
