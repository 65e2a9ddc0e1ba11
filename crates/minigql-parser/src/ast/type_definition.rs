use serde::Deserialize;
use serde::Serialize;

/// A `type Name { ... }` definition.
///
/// Only field names are kept; field argument lists and type annotations are
/// parsed for well-formedness and then discarded.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TypeDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
}

impl TypeDefinition {
    /// Field names in declaration order. Used to auto-register resolvers
    /// for the root types of a schema.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}
