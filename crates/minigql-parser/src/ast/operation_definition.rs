use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use serde::Deserialize;
use serde::Serialize;

/// An operation: `query`, `mutation` or `subscription`.
///
/// A document that starts directly with `{` is shorthand for an anonymous
/// query; in that case `operation` is [`OperationKind::Query`], `name` is
/// `None` and there are no variable definitions.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub operation: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub selection_set: SelectionSet,
}
