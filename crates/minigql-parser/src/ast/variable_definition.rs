use crate::ast::TypeAnnotation;
use serde::Deserialize;
use serde::Serialize;

/// A variable declared on an operation, e.g. `$id: ID!`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableDefinition {
    /// Variable name without the leading `$`.
    pub variable: String,
    /// `None` when the source omits `: Type`.
    pub type_annotation: Option<TypeAnnotation>,
}
