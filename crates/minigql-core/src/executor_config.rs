/// Default bound on how deeply selection sets may nest during execution.
/// Matches the parser's recursion limit, so anything the parser accepts
/// executes.
pub const DEFAULT_MAX_DEPTH: usize = minigql_parser::MAX_RECURSION_DEPTH;

/// Tunables for an [`Executor`](crate::Executor).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExecutorConfig {
    /// Maximum number of nested selection sets (the root selection set is
    /// depth 1). Deeper documents fail with
    /// [`ExecutionError::MaxDepthExceeded`](crate::ExecutionError::MaxDepthExceeded).
    pub max_depth: usize,

    /// When `true`, arguments are built with
    /// [`resolve_argument`](crate::resolve_argument), which fails on
    /// missing variables and malformed integers. When `false` (the default)
    /// they are built with [`build_value`](crate::build_value), which
    /// substitutes `null` and `0`.
    pub strict_variables: bool,
}

impl ExecutorConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_strict_variables(mut self, strict_variables: bool) -> Self {
        self.strict_variables = strict_variables;
        self
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_variables: false,
        }
    }
}
