use crate::ast::Argument;
use crate::ast::SelectionSet;
use serde::Deserialize;
use serde::Serialize;

/// A field selection, e.g. `user(id: 1) { name }`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// Looks up an argument by name. With duplicate names the first one
    /// wins.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}
