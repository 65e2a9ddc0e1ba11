use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// A literal value as written in source.
///
/// Scalars keep their raw text; conversion to runtime values (and the
/// handling of malformed integers) is left to the executor.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    /// A list literal: `[1, 2, 3]`.
    Array(Vec<Value>),
    /// `true` or `false`.
    Boolean(bool),
    /// Any other bare name, e.g. `ADMIN`.
    Enum(String),
    /// A malformed value. Carries either the offending token text or a
    /// diagnostic such as `expected object key`.
    Illegal(String),
    /// Raw digit text, e.g. `"42"`. Not range-checked.
    Int(String),
    /// An object literal with keys in source order. A repeated key keeps
    /// its first position and its last value.
    Object(IndexMap<String, Value>),
    /// String contents without the quotes.
    String(String),
    /// Variable name without the `$`. Empty when `$` is not followed by a
    /// name.
    Variable(String),
}
