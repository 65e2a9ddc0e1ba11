use crate::ast::OperationDefinition;
use crate::ast::TypeDefinition;
use serde::Deserialize;
use serde::Serialize;

/// Root AST node: the ordered definitions of a parsed document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// The first definition in source order, which is the one an executor
    /// runs.
    pub fn first_definition(&self) -> Option<&Definition> {
        self.definitions.first()
    }

    /// Iterate over operation definitions only.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Type(_) => None,
        })
    }

    /// Iterate over `type` definitions only.
    pub fn type_definitions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(_) => None,
            Definition::Type(type_def) => Some(type_def),
        })
    }
}

/// A top-level definition.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
    Type(TypeDefinition),
}
