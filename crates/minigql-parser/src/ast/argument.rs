use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

/// A single `name: value` argument on a field.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}
