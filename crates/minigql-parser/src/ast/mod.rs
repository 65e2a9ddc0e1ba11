//! AST types for parsed documents.
//!
//! Nodes own their strings, so a [`Document`] outlives the source text it
//! was parsed from and can be shared read-only across threads. Every node
//! derives `serde`'s `Serialize`/`Deserialize` for tooling output.
//!
//! # Example
//!
//! ```rust
//! use minigql_parser::ast;
//!
//! let doc = minigql_parser::parse("query Q($id: ID!) { user(id: $id) { name } }")
//!     .into_ast();
//! let op = doc.operations().next().unwrap();
//! assert_eq!(op.operation, ast::OperationKind::Query);
//! assert_eq!(op.name.as_deref(), Some("Q"));
//! ```

mod argument;
mod document;
mod field;
mod operation_definition;
mod operation_kind;
mod selection_set;
mod type_annotation;
mod type_definition;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use document::Definition;
pub use document::Document;
pub use field::Field;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::Nullability;
pub use type_annotation::TypeAnnotation;
pub use type_definition::FieldDefinition;
pub use type_definition::TypeDefinition;
pub use value::Value;
pub use variable_definition::VariableDefinition;
