//! Various test utils.

use crate::ByteSpan;
use crate::ast;
use crate::parse_document;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Creates a mock token with the given kind and literal and an empty span.
pub fn mock_token(kind: GraphQLTokenKind, literal: &str) -> GraphQLToken<'static> {
    GraphQLToken {
        kind,
        literal: literal.to_string().into(),
        span: ByteSpan::default(),
    }
}

/// A mock token source that produces tokens from a Vec.
///
/// Unlike `StrGraphQLTokenSource` it does not have to end with an `Eof`
/// token, which lets tests exercise sources that simply stop yielding.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses `source` and returns its first definition as an operation,
/// panicking if there is none.
pub fn extract_operation(source: &str) -> ast::OperationDefinition {
    let doc = parse_document(source);
    match doc.definitions.into_iter().next() {
        Some(ast::Definition::Operation(op)) => op,
        other => panic!("Expected an operation as first definition, got: {other:?}"),
    }
}

/// The fields of the operation's top-level selection set.
pub fn top_level_fields(op: &ast::OperationDefinition) -> Vec<&ast::Field> {
    op.selection_set
        .as_ref()
        .expect("operation should have a selection set")
        .fields()
        .collect()
}

/// Parses `{ field(arg: <value_source>) }` and returns the argument's value.
pub fn parse_arg_value(value_source: &str) -> ast::Value {
    let op = extract_operation(&format!("{{ field(arg: {value_source}) }}"));
    let fields = top_level_fields(&op);
    let field = fields.first().expect("one field");
    assert_eq!(field.arguments.len(), 1, "arguments: {:?}", field.arguments);
    field.arguments[0].value.clone()
}
