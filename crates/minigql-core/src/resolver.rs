use crate::value::Arguments;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

type ResolverFn =
    dyn Fn(Option<&Value>, &Arguments) -> Result<Value, ResolverError> + Send + Sync;

/// A user-supplied function that produces the value of a root field.
///
/// Resolvers receive the parent value (absent at the root) and the field's
/// arguments. Cloning a `Resolver` is cheap; clones share the same function.
#[derive(Clone)]
pub struct Resolver(Arc<ResolverFn>);

impl Resolver {
    pub fn new<F>(resolver_fn: F) -> Self
    where
        F: Fn(Option<&Value>, &Arguments) -> Result<Value, ResolverError> + Send + Sync + 'static,
    {
        Self(Arc::new(resolver_fn))
    }

    pub fn call(&self, source: Option<&Value>, args: &Arguments) -> Result<Value, ResolverError> {
        (self.0)(source, args)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

/// A failure reported by a [`Resolver`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ResolverError {
    message: String,
}

impl ResolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl From<String> for ResolverError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ResolverError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
