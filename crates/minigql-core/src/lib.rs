//! Execution engine for `minigql` documents.
//!
//! An [`Executor`] holds three resolver tables (query, mutation and
//! subscription) keyed by field name. Executing a parsed
//! [`Document`](minigql_parser::ast::Document) walks the first operation's
//! selection set: top-level fields are dispatched to registered resolvers,
//! nested fields are looked up structurally on the [`Record`]s those resolvers
//! return, and argument literals are materialized into runtime [`Value`]s with
//! variables bound late from a caller-supplied [`Variables`] map.
//!
//! Subscriptions hand back an [`EventStream`] that the caller drains.

mod argument_values;
mod event_stream;
mod execution_error;
mod execution_response;
mod executor;
pub mod global;
mod record;
mod resolver;
mod resolver_table;
mod value;

pub use argument_values::materialize_arguments;
pub use argument_values::materialize_value;
pub use event_stream::EventStream;
pub use execution_error::ExecutionError;
pub use execution_response::ExecutionResponse;
pub use executor::Executor;
pub use record::DynamicRecord;
pub use record::Record;
pub use record::RecordMember;
pub use record::lookup_member;
pub use resolver::Arguments;
pub use resolver::Resolved;
pub use resolver::Resolver;
pub use resolver::ResolverError;
pub use resolver::Variables;
pub use resolver_table::ResolverTable;
pub use value::Value;

#[cfg(test)]
mod tests;
