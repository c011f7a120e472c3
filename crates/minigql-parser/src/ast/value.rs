use indexmap::IndexMap;

/// A literal (or variable reference) appearing as an argument value.
///
/// Values are kept in their source form: integers are the raw digit string,
/// and no coercion happens until execution time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Boolean(bool),
    /// A name other than `true`/`false` used as a value, e.g. `ACTIVE`.
    Enum(String),
    /// The raw token text. Constructs the parser could not make sense of
    /// (e.g. a stray `)` in value position, or an argument name without a
    /// colon) also end up here, carrying the offending literal or a short
    /// message such as `"expected object key"`.
    Illegal(String),
    /// The raw digit string, e.g. `"42"`.
    Int(String),
    List(Vec<Value>),
    /// Entries keep source order; a repeated key overwrites the earlier
    /// value in place.
    Object(IndexMap<String, Value>),
    String(String),
    /// The variable name without the `$` sigil. Empty when `$` was not
    /// followed by a name.
    Variable(String),
}

impl Value {
    /// A short, lowercase description of this value's variant for
    /// diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Enum(_) => "enum",
            Value::Illegal(_) => "illegal",
            Value::Int(_) => "int",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::String(_) => "string",
            Value::Variable(_) => "variable",
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Value::Variable(name) => Some(name),
            _ => None,
        }
    }
}
