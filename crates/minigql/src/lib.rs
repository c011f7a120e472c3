//! A small GraphQL query engine.
//!
//! `minigql` tokenizes and parses a pragmatic subset of GraphQL into an
//! [`ast::Document`], then executes it against field resolvers registered on
//! an [`Executor`]:
//!
//! ```rust
//! use minigql::Executor;
//! use minigql::Resolved;
//! use minigql::Variables;
//!
//! let executor = Executor::new();
//! executor.register_query_resolver("greet", |_source, _args| {
//!     Ok(Resolved::value("Hello, World!"))
//! });
//!
//! let document = minigql::parse_document("{ greet }");
//! let response = executor.execute(&document, &Variables::new()).unwrap();
//! assert_eq!(
//!     response.to_json().unwrap(),
//!     serde_json::json!({"data": {"greet": "Hello, World!"}}),
//! );
//! ```
//!
//! Nested selection sets select from [`Record`]s, which `#[derive(Record)]`
//! in [`macros`] implements for plain structs.

pub use minigql_core::*;
pub use minigql_parser::ByteSpan;
pub use minigql_parser::GraphQLParser;
pub use minigql_parser::ast;
pub use minigql_parser::parse_document;
pub use minigql_parser::token;
pub use minigql_parser::token_source;

/// Derive macros for exposing Rust types to nested selection sets (e.g.
/// `#[derive(Record)]`).
#[cfg(feature = "macros")]
pub mod macros {
    pub use minigql_macros::*;
}
