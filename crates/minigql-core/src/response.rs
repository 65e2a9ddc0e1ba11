use crate::value::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// The result of a successful execution: the resolved root fields, in
/// selection order.
///
/// Serializes as `{"data": {...}}`. Choosing a wire encoding is left to the
/// transport.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Response {
    pub data: IndexMap<String, Value>,
}

impl Response {
    pub fn new(data: IndexMap<String, Value>) -> Self {
        Self { data }
    }

    /// Returns the value of a root field.
    pub fn get(&self, field_name: &str) -> Option<&Value> {
        self.data.get(field_name)
    }

    /// Converts the data into a single [`Value::Object`].
    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }
}
