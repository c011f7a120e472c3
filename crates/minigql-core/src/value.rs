use crate::Record;
use indexmap::IndexMap;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use std::sync::Arc;

/// A runtime value: a resolver result, a materialized argument, a variable
/// binding or an event.
///
/// [`Record`](Value::Record) is the only variant with selectable members;
/// everything else is returned verbatim when a nested selection set is
/// applied to it.
#[derive(Clone, Debug)]
pub enum Value {
    Boolean(bool),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    /// A plain key/value mapping. Unlike a record it is not traversed by
    /// nested selection sets.
    Object(IndexMap<String, Value>),
    Record(Arc<dyn Record>),
    String(String),
}

impl Value {
    /// Wraps a [`Record`] implementation.
    pub fn record<T: Record + 'static>(record: T) -> Self {
        Value::Record(Arc::new(record))
    }

    /// A short, lowercase name for this value's variant, used in error
    /// messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Float(_) => "float",
            Value::Int(_) => "int",
            Value::List(_) => "list",
            Value::Null => "null",
            Value::Object(_) => "object",
            Value::Record(_) => "record",
            Value::String(_) => "string",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats, and ints widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Value::Record(record) => Some(record.as_ref()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Records compare structurally: same type name, same members, and equal
    /// member values.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => records_equal(a.as_ref(), b.as_ref()),
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

fn records_equal(a: &dyn Record, b: &dyn Record) -> bool {
    if a.type_name() != b.type_name() {
        return false;
    }
    let a_members = a.members();
    a_members == b.members()
        && a_members
            .iter()
            .all(|member| a.member_value(member.name) == b.member_value(member.name))
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::List(items) => items.serialize(serializer),
            Value::Null => serializer.serialize_unit(),
            Value::Object(fields) => fields.serialize(serializer),
            Value::Record(record) => {
                // Members serialize under their serialized name, the same
                // name nested selections can match on.
                let members = record.members();
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for member in &members {
                    let value = record.member_value(member.name).unwrap_or(Value::Null);
                    map.serialize_entry(member.output_name(), &value)?;
                }
                map.end()
            },
            Value::String(s) => serializer.serialize_str(s),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Value::Object(value)
    }
}

impl From<Arc<dyn Record>> for Value {
    fn from(value: Arc<dyn Record>) -> Self {
        Value::Record(value)
    }
}

impl From<serde_json::Value> for Value {
    /// Integral JSON numbers become [`Value::Int`] and all other numbers
    /// [`Value::Float`]; JSON objects become [`Value::Object`].
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            },
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
