use crate::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// The result of a successful query or mutation: the resolved selection set
/// under a `data` key.
///
/// Serializes as `{"data": {<fieldName>: <value>, ...}}`, with fields in
/// selection order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecutionResponse {
    pub data: IndexMap<String, Value>,
}

impl ExecutionResponse {
    /// The resolved value of a top-level field.
    pub fn get(&self, field_name: &str) -> Option<&Value> {
        self.data.get(field_name)
    }

    pub fn into_data(self) -> IndexMap<String, Value> {
        self.data
    }

    /// Converts this response into a `serde_json::Value`.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
