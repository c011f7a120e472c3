use crate::EventStream;
use crate::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// Materialized field arguments, in source order.
pub type Arguments = IndexMap<String, Value>;

/// Caller-supplied variable bindings, looked up by name (without `$`).
pub type Variables = IndexMap<String, Value>;

/// The error type resolvers fail with. Any error type converts into it
/// with `?` or `.into()`.
pub type ResolverError = Box<dyn std::error::Error + Send + Sync>;

/// A resolver function: `(source, arguments) -> Resolved`.
///
/// Top-level resolvers are always invoked with an absent source.
pub type Resolver =
    Arc<dyn Fn(Option<&Value>, &Arguments) -> Result<Resolved, ResolverError> + Send + Sync>;

/// What a resolver produced: a plain value for queries and mutations, or an
/// event stream for subscriptions.
#[derive(Debug)]
pub enum Resolved {
    Events(EventStream),
    Value(Value),
}

impl Resolved {
    pub fn value(value: impl Into<Value>) -> Self {
        Resolved::Value(value.into())
    }

    /// Short name of the variant, used in log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Resolved::Events(_) => "event stream",
            Resolved::Value(value) => value.kind_name(),
        }
    }
}

impl From<Value> for Resolved {
    fn from(value: Value) -> Self {
        Resolved::Value(value)
    }
}

impl From<EventStream> for Resolved {
    fn from(events: EventStream) -> Self {
        Resolved::Events(events)
    }
}
