use crate::resolver::Resolver;
use crate::resolver::ResolverError;
use crate::value::Arguments;
use crate::value::Value;
use minigql_parser::ast::OperationKind;
use parking_lot::RwLock;
use std::collections::HashMap;

type ResolverMap = RwLock<HashMap<String, Resolver>>;

/// Root-field resolvers, one map per [`OperationKind`].
///
/// Registration overwrites silently (the last registration for a name wins)
/// and there is no removal. Each map sits behind its own reader/writer lock,
/// so a registry shared through an `Arc` can be registered into and looked
/// up from concurrently.
#[derive(Debug, Default)]
pub struct ResolverRegistry {
    queries: ResolverMap,
    mutations: ResolverMap,
    subscriptions: ResolverMap,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: OperationKind) -> &ResolverMap {
        match kind {
            OperationKind::Mutation => &self.mutations,
            OperationKind::Query => &self.queries,
            OperationKind::Subscription => &self.subscriptions,
        }
    }

    /// Registers a resolver function for root field `name`.
    pub fn register<F>(&self, kind: OperationKind, name: impl Into<String>, resolver_fn: F)
    where
        F: Fn(Option<&Value>, &Arguments) -> Result<Value, ResolverError> + Send + Sync + 'static,
    {
        self.insert(kind, name, Resolver::new(resolver_fn));
    }

    /// Registers an already-built [`Resolver`] for root field `name`.
    pub fn insert(&self, kind: OperationKind, name: impl Into<String>, resolver: Resolver) {
        let name = name.into();
        let previous = self.map(kind).write().insert(name.clone(), resolver);
        if previous.is_some() {
            log::debug!("replaced {kind} resolver `{name}`");
        } else {
            log::debug!("registered {kind} resolver `{name}`");
        }
    }

    pub fn register_query<F>(&self, name: impl Into<String>, resolver_fn: F)
    where
        F: Fn(Option<&Value>, &Arguments) -> Result<Value, ResolverError> + Send + Sync + 'static,
    {
        self.register(OperationKind::Query, name, resolver_fn);
    }

    pub fn register_mutation<F>(&self, name: impl Into<String>, resolver_fn: F)
    where
        F: Fn(Option<&Value>, &Arguments) -> Result<Value, ResolverError> + Send + Sync + 'static,
    {
        self.register(OperationKind::Mutation, name, resolver_fn);
    }

    pub fn register_subscription<F>(&self, name: impl Into<String>, resolver_fn: F)
    where
        F: Fn(Option<&Value>, &Arguments) -> Result<Value, ResolverError> + Send + Sync + 'static,
    {
        self.register(OperationKind::Subscription, name, resolver_fn);
    }

    /// Returns the resolver registered for `name`, if any. The returned
    /// handle is a clone, so no lock is held while it runs.
    pub fn lookup(&self, kind: OperationKind, name: &str) -> Option<Resolver> {
        self.map(kind).read().get(name).cloned()
    }

    pub fn contains(&self, kind: OperationKind, name: &str) -> bool {
        self.map(kind).read().contains_key(name)
    }

    /// Names registered for `kind`, sorted.
    pub fn field_names(&self, kind: OperationKind) -> Vec<String> {
        let mut names: Vec<String> = self.map(kind).read().keys().cloned().collect();
        names.sort();
        names
    }
}
