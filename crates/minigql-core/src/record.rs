//! Record-shaped runtime values with an explicit field-accessor table.
//!
//! Nested fields are resolved against a [`Record`] by name. Each record
//! publishes its fields in declaration order as [`FieldDescriptor`]s, and
//! [`Record::field_value`] reads a field by its position in that table. The
//! [`record!`](crate::record!) macro implements the trait for plain structs.

use crate::value::Value;
use std::fmt::Debug;

/// Describes one field of a [`Record`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldDescriptor {
    /// The field's identifier as declared.
    pub ident: &'static str,

    /// An optional serialization tag such as `"id"` or `"id,omitempty"`.
    /// Only the segment before the first comma is a name.
    pub tag: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn new(ident: &'static str) -> Self {
        Self { ident, tag: None }
    }

    pub const fn tagged(ident: &'static str, tag: &'static str) -> Self {
        Self { ident, tag: Some(tag) }
    }

    /// The name portion of the tag, if there is a non-empty one.
    pub fn tag_name(&self) -> Option<&'static str> {
        self.tag
            .and_then(|tag| tag.split(',').next())
            .filter(|name| !name.is_empty())
    }

    /// The key this field is serialized under.
    pub fn serialized_name(&self) -> &'static str {
        self.tag_name().unwrap_or(self.ident)
    }

    /// Returns `true` if a selected field name refers to this field: either
    /// the identifier or the tag name, compared case-insensitively.
    pub fn matches(&self, field_name: &str) -> bool {
        self.ident.eq_ignore_ascii_case(field_name)
            || self
                .tag_name()
                .is_some_and(|tag_name| tag_name.eq_ignore_ascii_case(field_name))
    }
}

/// A value whose fields can be selected by name.
pub trait Record: Debug + Send + Sync {
    /// This record's fields, in declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Reads the field at `index` in [`fields()`](Self::fields). Out of range
    /// indices read as [`Value::Null`].
    fn field_value(&self, index: usize) -> Value;

    /// Finds the first field (in declaration order) that `field_name` refers
    /// to and reads it.
    fn lookup(&self, field_name: &str) -> Option<Value> {
        self.fields()
            .iter()
            .position(|field| field.matches(field_name))
            .map(|index| self.field_value(index))
    }
}

/// Implements [`Record`] for a struct by listing its selectable fields, and
/// adds a `From<T> for Value` conversion.
///
/// Every listed field's type must be `Clone + Into<Value>`. A field may carry
/// a serialization tag with `as "tag"`.
///
/// ```
/// use minigql_core::Record;
/// use minigql_core::Value;
///
/// #[derive(Clone, Debug)]
/// struct User {
///     user_id: i64,
///     name: String,
/// }
///
/// minigql_core::record!(User {
///     user_id as "id,omitempty",
///     name,
/// });
///
/// let user = User { user_id: 7, name: "Ada".to_string() };
/// assert_eq!(user.lookup("ID"), Some(Value::Int(7)));
/// assert_eq!(user.lookup("Name"), Some(Value::from("Ada")));
/// assert_eq!(user.lookup("email"), None);
/// ```
#[macro_export]
macro_rules! record {
    (@tag) => {
        ::std::option::Option::None
    };
    (@tag $tag:literal) => {
        ::std::option::Option::Some($tag)
    };
    ($ty:ty { $($field:ident $(as $tag:literal)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields(&self) -> &'static [$crate::FieldDescriptor] {
                const FIELDS: &[$crate::FieldDescriptor] = &[
                    $($crate::FieldDescriptor {
                        ident: ::std::stringify!($field),
                        tag: $crate::record!(@tag $($tag)?),
                    }),*
                ];
                FIELDS
            }

            fn field_value(&self, index: usize) -> $crate::Value {
                let accessors: &[fn(&$ty) -> $crate::Value] = &[
                    $(|record: &$ty| {
                        $crate::Value::from(::std::clone::Clone::clone(&record.$field))
                    }),*
                ];
                accessors
                    .get(index)
                    .map_or($crate::Value::Null, |accessor| accessor(self))
            }
        }

        impl ::std::convert::From<$ty> for $crate::Value {
            fn from(record: $ty) -> Self {
                $crate::Value::Record(::std::sync::Arc::new(record))
            }
        }
    };
}
