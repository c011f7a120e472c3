//! Tests for `type` definition parsing.

use crate::ast;
use crate::parse_document;

fn extract_type_definition(source: &str) -> ast::TypeDefinition {
    let doc = parse_document(source);
    match doc.definitions.into_iter().next() {
        Some(ast::Definition::Type(def)) => def,
        other => panic!("Expected a type definition, got: {other:?}"),
    }
}

#[test]
fn field_names_are_retained() {
    let def = extract_type_definition(
        "type Query {
            hello: String
            user(id: ID!): User
            users(filter: UserFilter, first: Int = 10): [User!]!
        }",
    );
    assert_eq!(def.name, "Query");
    assert_eq!(def.field_names().collect::<Vec<_>>(), vec!["hello", "user", "users"]);
    assert!(def.has_field("user"));
    assert!(!def.has_field("id"));
}

/// Nested parentheses in argument lists are skipped as one balanced block.
#[test]
fn nested_parens_in_arguments() {
    let def = extract_type_definition("type T { a(x: (y)): Int b: Int }");
    assert_eq!(def.fields, vec!["a", "b"]);
}

#[test]
fn fields_separated_by_commas() {
    let def = extract_type_definition("type T { a: Int, b: [String], c }");
    assert_eq!(def.fields, vec!["a", "b", "c"]);
}

#[test]
fn empty_type() {
    let def = extract_type_definition("type Empty {}");
    assert_eq!(def.name, "Empty");
    assert!(def.fields.is_empty());
}

/// Unexpected tokens inside the body are skipped.
#[test]
fn junk_in_body_is_skipped() {
    let def = extract_type_definition("type T { @deprecated a: Int 42 b }");
    assert_eq!(def.fields, vec!["deprecated", "a", "b"]);
}

/// `type` without a name, or without a body, yields no definition.
#[test]
fn incomplete_type_definitions_are_dropped() {
    assert!(parse_document("type").is_empty());
    assert!(parse_document("type { a }").definitions.iter().all(|def| {
        !matches!(def, ast::Definition::Type(_))
    }));
    assert!(parse_document("type Foo").is_empty());
}

#[test]
fn unterminated_body_keeps_fields() {
    let def = extract_type_definition("type T { a: Int b(x: Int");
    assert_eq!(def.fields, vec!["a", "b"]);
}

#[test]
fn schema_with_operation() {
    let doc = parse_document(
        "type Query { greet: String }
         type Subscription { ticks: Int }
         query { greet }",
    );
    assert_eq!(doc.type_definitions().count(), 2);
    assert_eq!(doc.operations().count(), 1);
    assert_eq!(
        doc.type_definition("Subscription").map(|def| def.fields.clone()),
        Some(vec!["ticks".to_string()]),
    );
    assert_eq!(doc.identity(), "Query");
}
