use crate::resolver::ResolverError;
use std::num::ParseIntError;

/// Broad category of an [`ExecutionError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExecutionErrorKind {
    /// The argument values could not be built.
    Argument,
    /// The document has nothing executable in it.
    Document,
    /// A field could not be resolved.
    Resolution,
    /// A subscription could not be started.
    Subscription,
}

/// A fault that aborts an execution pass.
///
/// Execution fails fast: the first fault ends the pass and no partial data
/// is returned.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("no definitions found")]
    NoDefinitions,

    #[error("unsupported definition type: expected an operation")]
    UnsupportedDefinition,

    #[error("no resolver found for field `{field}`")]
    ResolverNotFound { field: String },

    #[error("no field matching `{field}` on {type_name}")]
    FieldNotFound { field: String, type_name: &'static str },

    #[error("cannot resolve field `{field}`: source is {type_name}, not a record")]
    NotARecord { field: String, type_name: &'static str },

    #[error("resolver for field `{field}` failed: {source}")]
    Resolver {
        field: String,
        #[source]
        source: ResolverError,
    },

    #[error("variable `{name}` not provided")]
    VariableNotProvided { name: String },

    #[error("invalid integer literal `{literal}`: {source}")]
    InvalidInt {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("selection nesting exceeds the maximum depth of {max_depth}")]
    MaxDepthExceeded { max_depth: usize },

    #[error("no subscription resolver found for field `{field}`")]
    SubscriptionResolverNotFound { field: String },

    #[error("subscription resolver for field `{field}` returned {type_name}, not a stream")]
    NotStreamShaped { field: String, type_name: &'static str },

    #[error("the stream returned for field `{field}` has already been taken")]
    StreamAlreadyTaken { field: String },

    #[error("provided operation is not a subscription")]
    NotASubscription,

    #[error("subscription selection set is empty")]
    EmptySubscription,
}

impl ExecutionError {
    pub fn kind(&self) -> ExecutionErrorKind {
        match self {
            ExecutionError::NoDefinitions
            | ExecutionError::UnsupportedDefinition
            | ExecutionError::MaxDepthExceeded { .. } => ExecutionErrorKind::Document,

            ExecutionError::ResolverNotFound { .. }
            | ExecutionError::FieldNotFound { .. }
            | ExecutionError::NotARecord { .. }
            | ExecutionError::Resolver { .. } => ExecutionErrorKind::Resolution,

            ExecutionError::VariableNotProvided { .. }
            | ExecutionError::InvalidInt { .. } => ExecutionErrorKind::Argument,

            ExecutionError::SubscriptionResolverNotFound { .. }
            | ExecutionError::NotStreamShaped { .. }
            | ExecutionError::StreamAlreadyTaken { .. }
            | ExecutionError::NotASubscription
            | ExecutionError::EmptySubscription => ExecutionErrorKind::Subscription,
        }
    }
}
