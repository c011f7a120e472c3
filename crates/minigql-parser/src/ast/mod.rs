//! Owned AST types for parsed documents.
//!
//! Every node owns its strings, so a parsed [`Document`] has no lifetime
//! parameter and can be shared across threads (e.g. behind an `Arc`) and
//! executed any number of times with different variable bindings. Nodes are
//! built once by the parser and never mutated by the execution engine.
//!
//! Polymorphic nodes are sum types: [`Definition`], [`Selection`], [`Value`]
//! and [`TypeAnnotation`] carry exactly the payload their variant needs.
//!
//! # Example
//!
//! ```rust
//! use minigql_parser::ast;
//! use minigql_parser::GraphQLParser;
//!
//! let doc = GraphQLParser::new("{ hello }").parse_document();
//! let op = doc.first_operation().unwrap();
//! assert_eq!(op.kind, ast::OperationKind::Query);
//! ```

mod argument;
mod definition;
mod document;
mod field;
mod operation_definition;
mod operation_kind;
mod selection_set;
mod type_annotation;
mod type_definition;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use definition::Definition;
pub use document::Document;
pub use field::Field;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::Nullability;
pub use type_annotation::TypeAnnotation;
pub use type_definition::TypeDefinition;
pub use value::Value;
pub use variable_definition::VariableDefinition;
