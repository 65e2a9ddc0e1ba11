use crate::ast::Field;
use serde::Deserialize;
use serde::Serialize;

/// A `{ ... }` block of selections.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

impl SelectionSet {
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Iterate over the field selections in source order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.selections.iter().map(|selection| match selection {
            Selection::Field(field) => field,
        })
    }
}

/// A single selection. Fragments are not supported, so fields are the
/// only kind.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Selection {
    Field(Field),
}
