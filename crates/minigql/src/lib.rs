pub use minigql_core::*;

/// The lexer, AST and fault-tolerant parser that [`Executor`] runs on.
pub mod parser {
    pub use minigql_parser::*;
}
