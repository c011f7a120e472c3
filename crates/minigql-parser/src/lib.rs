//! A tolerant tokenizer and recursive descent parser for a pragmatic subset of
//! GraphQL: operations (queries, mutations, subscriptions) with variables,
//! arguments and nested selections, plus `type` definitions whose field names
//! are retained for resolver wiring.
//!
//! Neither stage ever fails. The tokenizer turns anything it does not
//! recognize into [`Illegal`](token::GraphQLTokenKind::Illegal) tokens, and
//! the parser degrades malformed input into a partial (possibly empty)
//! [`ast::Document`].
//!
//! The tokenizer is pluggable: [`GraphQLParser`] works over any
//! [`GraphQLTokenSource`](token_source::GraphQLTokenSource), with
//! [`StrGraphQLTokenSource`](token_source::StrGraphQLTokenSource) lexing from
//! a `&str`.

pub mod ast;
mod byte_span;
mod graphql_parser;
mod graphql_token_cursor;
pub mod token;
pub mod token_source;

pub use byte_span::ByteSpan;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser::parse_document;
pub use graphql_token_cursor::GraphQLTokenCursor;

#[cfg(test)]
mod tests;
