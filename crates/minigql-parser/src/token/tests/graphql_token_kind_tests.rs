//! Tests for `GraphQLTokenKind`.

use crate::token::GraphQLTokenKind;

/// Verifies that every punctuation character maps to a punctuator kind and
/// that the mapping round-trips through `as_punctuator_str()`.
#[test]
fn from_punctuator_round_trips() {
    for ch in "=:,;(){}[]$!".chars() {
        let kind = GraphQLTokenKind::from_punctuator(ch)
            .unwrap_or_else(|| panic!("`{ch}` should be a punctuator"));
        assert!(kind.is_punctuator());
        assert_eq!(kind.as_punctuator_str(), Some(ch.to_string().as_str()));
    }
}

/// Verifies that characters outside the punctuator set are not mapped.
#[test]
fn from_punctuator_rejects_other_chars() {
    for ch in ['@', '.', '&', '|', '#', 'a', '1', '"'] {
        assert_eq!(GraphQLTokenKind::from_punctuator(ch), None, "{ch}");
    }
}

/// Verifies the literal/punctuator classification of non-punctuator kinds.
#[test]
fn literal_kinds_are_not_punctuators() {
    for kind in [
        GraphQLTokenKind::Name,
        GraphQLTokenKind::IntValue,
        GraphQLTokenKind::StringValue,
    ] {
        assert!(kind.is_literal());
        assert!(!kind.is_punctuator());
    }
    assert!(!GraphQLTokenKind::Eof.is_literal());
    assert!(!GraphQLTokenKind::Illegal.is_literal());
    assert!(!GraphQLTokenKind::Comma.is_literal());
}

/// Verifies the stable display names used by the CLI.
#[test]
fn display_uses_stable_names() {
    assert_eq!(GraphQLTokenKind::Name.to_string(), "IDENT");
    assert_eq!(GraphQLTokenKind::IntValue.to_string(), "INT");
    assert_eq!(GraphQLTokenKind::StringValue.to_string(), "STRING");
    assert_eq!(GraphQLTokenKind::Eof.to_string(), "EOF");
    assert_eq!(GraphQLTokenKind::Illegal.to_string(), "ILLEGAL");
    assert_eq!(GraphQLTokenKind::Equals.to_string(), "ASSIGN");
    assert_eq!(GraphQLTokenKind::CurlyBraceOpen.to_string(), "LBRACE");
    assert_eq!(GraphQLTokenKind::Bang.to_string(), "BANG");
}
