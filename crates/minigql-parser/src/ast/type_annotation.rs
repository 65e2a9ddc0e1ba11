use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Whether a type position accepts `null`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Nullability {
    NonNull,
    Nullable,
}

/// A type reference as written in source, e.g. `String`, `[ID!]!`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NamedTypeAnnotation {
    pub name: String,
    pub nullability: Nullability,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ListTypeAnnotation {
    /// `None` for a list written without an element type (`[]`).
    pub element_type: Option<Box<TypeAnnotation>>,
    pub nullability: Nullability,
}

impl TypeAnnotation {
    pub fn named(name: impl Into<String>, nullability: Nullability) -> Self {
        TypeAnnotation::Named(NamedTypeAnnotation {
            name: name.into(),
            nullability,
        })
    }

    pub fn list(element_type: Option<TypeAnnotation>, nullability: Nullability) -> Self {
        TypeAnnotation::List(ListTypeAnnotation {
            element_type: element_type.map(Box::new),
            nullability,
        })
    }

    /// The named type at this level, or `None` for a list.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeAnnotation::List(_) => None,
            TypeAnnotation::Named(named) => Some(&named.name),
        }
    }

    /// The innermost named type, looking through any list wrappers. `None`
    /// when the innermost list has no element type.
    pub fn innermost_name(&self) -> Option<&str> {
        match self {
            TypeAnnotation::List(list) => list.element_type.as_deref()?.innermost_name(),
            TypeAnnotation::Named(named) => Some(&named.name),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeAnnotation::List(_))
    }

    pub fn nullability(&self) -> Nullability {
        match self {
            TypeAnnotation::List(list) => list.nullability,
            TypeAnnotation::Named(named) => named.nullability,
        }
    }

    pub fn is_non_null(&self) -> bool {
        self.nullability() == Nullability::NonNull
    }

    /// The element type of a list, or `None` for a named type.
    pub fn elem(&self) -> Option<&TypeAnnotation> {
        match self {
            TypeAnnotation::List(list) => list.element_type.as_deref(),
            TypeAnnotation::Named(_) => None,
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeAnnotation::List(list) => {
                f.write_str("[")?;
                if let Some(element_type) = &list.element_type {
                    write!(f, "{element_type}")?;
                }
                f.write_str("]")?;
            },
            TypeAnnotation::Named(named) => f.write_str(&named.name)?,
        }
        if self.is_non_null() {
            f.write_str("!")?;
        }
        Ok(())
    }
}
