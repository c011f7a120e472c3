use crate::Value;
use indexmap::IndexMap;

/// A value with named members that nested selection sets can select from.
///
/// This is the structural lookup capability the executor relies on when a
/// field has a nested selection set: each selected field name is matched
/// against [`members()`](Record::members) (see [`RecordMember::matches`]) and
/// the matching member's value is read with
/// [`member_value()`](Record::member_value).
///
/// Implement it with `#[derive(Record)]` from `minigql::macros`, by hand, or
/// use [`DynamicRecord`] for records assembled at runtime.
pub trait Record: std::fmt::Debug + Send + Sync {
    /// The record's type name, used in error messages.
    fn type_name(&self) -> &str;

    /// All selectable members, in declaration order.
    fn members(&self) -> Vec<RecordMember<'_>>;

    /// The value of the member declared as `name` (its declared name, not its
    /// serialized name).
    fn member_value(&self, name: &str) -> Option<Value>;
}

/// A member of a [`Record`]: its declared name and, optionally, the name it
/// serializes under.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecordMember<'a> {
    pub name: &'a str,
    pub serialized_name: Option<&'a str>,
}

impl<'a> RecordMember<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            serialized_name: None,
        }
    }

    pub fn with_serialized_name(mut self, serialized_name: &'a str) -> Self {
        self.serialized_name = Some(serialized_name);
        self
    }

    /// The name this member is emitted under in serialized output.
    pub fn output_name(&self) -> &'a str {
        self.serialized_name.unwrap_or(self.name)
    }

    /// Whether a selected field named `field_name` refers to this member:
    /// its declared name or its serialized name, compared
    /// case-insensitively.
    pub fn matches(&self, field_name: &str) -> bool {
        eq_ignore_case(self.name, field_name)
            || self
                .serialized_name
                .is_some_and(|serialized_name| eq_ignore_case(serialized_name, field_name))
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

/// Resolves `field_name` against `record`: the value of the first member
/// that [matches](RecordMember::matches) it, or `None` if no member does.
pub fn lookup_member(record: &dyn Record, field_name: &str) -> Option<Value> {
    let members = record.members();
    let member = members.iter().find(|member| member.matches(field_name))?;
    Some(record.member_value(member.name).unwrap_or(Value::Null))
}

/// A [`Record`] whose members are assembled at runtime, e.g. from JSON.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DynamicRecord {
    type_name: String,
    fields: IndexMap<String, Value>,
}

impl DynamicRecord {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Adds (or replaces) a member, builder-style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }
}

impl Record for DynamicRecord {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn members(&self) -> Vec<RecordMember<'_>> {
        self.fields.keys().map(|name| RecordMember::new(name)).collect()
    }

    fn member_value(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}

impl From<DynamicRecord> for Value {
    fn from(record: DynamicRecord) -> Self {
        Value::record(record)
    }
}
