//! Tests for `Executor::execute`: top-level dispatch, nested selection and
//! failure semantics.

use crate::ExecutionError;
use crate::Executor;
use crate::Resolved;
use crate::Value;
use crate::Variables;
use crate::tests::utils::User;
use crate::tests::utils::ada;
use crate::tests::utils::execute_to_json;
use crate::tests::utils::executor_with_users;
use indexmap::IndexMap;
use minigql_parser::parse_document;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

// =============================================================================
// Top-level dispatch
// =============================================================================

#[test]
fn greet() {
    let executor = executor_with_users();
    let result = execute_to_json(&executor, "{ greet }", &Variables::new());
    assert_eq!(result.unwrap(), json!({"data": {"greet": "Hello, World!"}}));
}

#[test]
fn no_definitions() {
    let executor = executor_with_users();
    let err = executor
        .execute(&parse_document(""), &Variables::new())
        .unwrap_err();
    assert!(matches!(err, ExecutionError::NoDefinitions), "{err:?}");
}

/// Malformed input that parses to nothing fails the same way as an empty
/// document.
#[test]
fn garbage_input_has_no_definitions() {
    let executor = executor_with_users();
    let err = executor
        .execute(&parse_document(") ] @ 42"), &Variables::new())
        .unwrap_err();
    assert!(matches!(err, ExecutionError::NoDefinitions), "{err:?}");
}

#[test]
fn type_definition_first_is_unsupported() {
    let executor = executor_with_users();
    let err = executor
        .execute(&parse_document("type User { id } { greet }"), &Variables::new())
        .unwrap_err();
    match err {
        ExecutionError::UnsupportedDefinition { definition } => {
            assert_eq!(definition, "type `User`");
        },
        other => panic!("Expected UnsupportedDefinition, got: {other:?}"),
    }
}

/// A string spelling `type` still leads a type definition, which cannot be
/// executed.
#[test]
fn quoted_type_keyword_is_unsupported() {
    let executor = executor_with_users();
    let err = executor
        .execute(&parse_document("\"type\" T { a } { greet }"), &Variables::new())
        .unwrap_err();
    match err {
        ExecutionError::UnsupportedDefinition { definition } => {
            assert_eq!(definition, "type `T`");
        },
        other => panic!("Expected UnsupportedDefinition, got: {other:?}"),
    }
}

#[test]
fn no_resolver() {
    let executor = executor_with_users();
    let err = execute_to_json(&executor, "{ greet missing }", &Variables::new()).unwrap_err();
    match &err {
        ExecutionError::NoResolver { field_name } => assert_eq!(field_name, "missing"),
        other => panic!("Expected NoResolver, got: {other:?}"),
    }
    assert_eq!(err.field_name(), Some("missing"));
}

/// Top-level fields fall back to the mutation table, and the operation
/// keyword does not select the table.
#[test]
fn mutation_table_fallback() {
    let executor = executor_with_users();
    executor.register_mutation_resolver("createUser", |_, args| {
        let name = args.get("name").and_then(Value::as_str).unwrap_or("anonymous");
        Ok(Resolved::value(User::new(9, name)))
    });

    let result = execute_to_json(
        &executor,
        "mutation { createUser(name: \"Linus\") { id name } greet }",
        &Variables::new(),
    );
    assert_eq!(
        result.unwrap(),
        json!({"data": {"createUser": {"id": 9, "name": "Linus"}, "greet": "Hello, World!"}}),
    );

    let result = execute_to_json(&executor, "{ createUser { name } }", &Variables::new());
    assert_eq!(
        result.unwrap(),
        json!({"data": {"createUser": {"name": "anonymous"}}}),
    );
}

#[test]
fn query_resolver_shadows_mutation_resolver() {
    let executor = Executor::new();
    executor.register_mutation_resolver("thing", |_, _| Ok(Resolved::value("mutation")));
    executor.register_query_resolver("thing", |_, _| Ok(Resolved::value("query")));

    assert!(executor.mutation_resolvers().contains("thing"));
    assert_eq!(executor.mutation_resolvers().len(), 1);

    let result = execute_to_json(&executor, "mutation { thing }", &Variables::new());
    assert_eq!(result.unwrap(), json!({"data": {"thing": "query"}}));
}

/// `into_data` hands back the resolved fields in selection order.
#[test]
fn response_into_data() {
    let executor = executor_with_users();
    executor.register_mutation_resolver("ping", |_, _| Ok(Resolved::value("pong")));

    let response = executor
        .execute(&parse_document("mutation { ping greet }"), &Variables::new())
        .unwrap();
    let data = response.into_data();
    assert_eq!(data.keys().map(String::as_str).collect::<Vec<_>>(), vec!["ping", "greet"]);
    assert_eq!(data.get("ping").and_then(Value::as_str), Some("pong"));
    assert_eq!(data.get("greet").and_then(Value::as_str), Some("Hello, World!"));
}

/// Re-registering a field replaces the previous resolver.
#[test]
fn registration_replaces() {
    let executor = Executor::new();
    executor.register_query_resolver("v", |_, _| Ok(Resolved::value(1)));
    executor.register_query_resolver("v", |_, _| Ok(Resolved::value(2)));

    let result = execute_to_json(&executor, "{ v }", &Variables::new());
    assert_eq!(result.unwrap(), json!({"data": {"v": 2}}));
    assert_eq!(executor.query_resolvers().len(), 1);
}

/// Top-level resolvers receive an absent source and the materialized
/// arguments.
#[test]
fn resolver_receives_no_source_and_arguments() {
    let executor = Executor::new();
    executor.register_query_resolver("echo", |source, args| {
        assert!(source.is_none());
        Ok(Resolved::value(Value::Object(args.clone())))
    });

    let result = execute_to_json(
        &executor,
        "{ echo(a: 1, b: \"two\", c: true, d: RED, e: [1, 2], f: {g: 3}) }",
        &Variables::new(),
    );
    assert_eq!(
        result.unwrap(),
        json!({"data": {"echo": {
            "a": 1, "b": "two", "c": true, "d": "RED", "e": [1, 2], "f": {"g": 3}
        }}}),
    );
}

/// Fields appear in selection order.
#[test]
fn selection_order_is_preserved() {
    let executor = Executor::new();
    for name in ["c", "a", "b"] {
        executor.register_query_resolver(name, move |_, _| Ok(Resolved::value(name)));
    }
    let document = parse_document("{ c a b }");
    let response = executor.execute(&document, &Variables::new()).unwrap();
    let keys: Vec<&str> = response.data.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["c", "a", "b"]);
}

/// An operation without a selection set yields empty data.
#[test]
fn missing_selection_set_yields_empty_data() {
    let executor = executor_with_users();
    let result = execute_to_json(&executor, "query Q", &Variables::new());
    assert_eq!(result.unwrap(), json!({"data": {}}));
}

/// Only the first definition is executed.
#[test]
fn only_first_operation_is_executed() {
    let executor = executor_with_users();
    let result = execute_to_json(&executor, "{ greet } { missing }", &Variables::new());
    assert_eq!(result.unwrap(), json!({"data": {"greet": "Hello, World!"}}));
}

// =============================================================================
// Nested selection
// =============================================================================

#[test]
fn nested_record_selection() {
    let executor = executor_with_users();
    let result = execute_to_json(&executor, "{ user { name id } }", &Variables::new());
    assert_eq!(result.unwrap(), json!({"data": {"user": {"name": "Ada", "id": 1}}}));
}

/// Member lookup is case-insensitive and also matches serialized names.
#[test]
fn member_lookup_by_case_and_serialized_name() {
    let executor = executor_with_users();
    let result = execute_to_json(
        &executor,
        "{ user { NAME emailAddress EMAIL } }",
        &Variables::new(),
    );
    assert_eq!(
        result.unwrap(),
        json!({"data": {"user": {
            "NAME": "Ada",
            "emailAddress": "ada@example.com",
            "EMAIL": "ada@example.com"
        }}}),
    );
}

#[test]
fn no_matching_member() {
    let executor = executor_with_users();
    let err = execute_to_json(&executor, "{ user { name age } }", &Variables::new()).unwrap_err();
    match err {
        ExecutionError::NoMatchingMember {
            field_name,
            type_name,
        } => {
            assert_eq!(field_name, "age");
            assert_eq!(type_name, "User");
        },
        other => panic!("Expected NoMatchingMember, got: {other:?}"),
    }
}

#[test]
fn list_of_records_is_selected_per_element() {
    let executor = executor_with_users();
    let result = execute_to_json(
        &executor,
        "{ user { friends { name } } }",
        &Variables::new(),
    );
    assert_eq!(
        result.unwrap(),
        json!({"data": {"user": {"friends": [{"name": "Grace"}, {"name": "Alan"}]}}}),
    );
}

#[test]
fn empty_list_stays_empty() {
    let executor = Executor::new();
    executor.register_query_resolver("users", |_, _| Ok(Resolved::value(Vec::<User>::new())));
    let result = execute_to_json(&executor, "{ users { name } }", &Variables::new());
    assert_eq!(result.unwrap(), json!({"data": {"users": []}}));
}

/// A null value with a nested selection set is returned unchanged.
#[test]
fn null_with_nested_selection_is_null() {
    let executor = Executor::new();
    executor.register_query_resolver("nobody", |_, _| Ok(Resolved::value(Option::<User>::None)));
    let result = execute_to_json(&executor, "{ nobody { name } }", &Variables::new());
    assert_eq!(result.unwrap(), json!({"data": {"nobody": null}}));
}

/// Scalars and plain objects are not traversable; a nested selection set on
/// them is ignored.
#[test]
fn non_traversable_values_are_returned_verbatim() {
    let executor = Executor::new();
    executor.register_query_resolver("count", |_, _| Ok(Resolved::value(3)));
    executor.register_query_resolver("config", |_, _| {
        let mut fields = IndexMap::new();
        fields.insert("debug".to_string(), Value::Boolean(true));
        Ok(Resolved::value(fields))
    });

    let result = execute_to_json(
        &executor,
        "{ count { anything } config { other } }",
        &Variables::new(),
    );
    assert_eq!(
        result.unwrap(),
        json!({"data": {"count": 3, "config": {"debug": true}}}),
    );
}

/// Selecting through a null list element fails.
#[test]
fn null_list_element_is_source_null() {
    let executor = Executor::new();
    executor.register_query_resolver("users", |_, _| {
        Ok(Resolved::value(vec![Some(User::new(1, "a")), None]))
    });
    let err = execute_to_json(&executor, "{ users { name } }", &Variables::new()).unwrap_err();
    match err {
        ExecutionError::SourceNull { field_name } => assert_eq!(field_name, "name"),
        other => panic!("Expected SourceNull, got: {other:?}"),
    }
}

#[test]
fn scalar_list_element_is_source_not_record() {
    let executor = Executor::new();
    executor.register_query_resolver("numbers", |_, _| Ok(Resolved::value(vec![1, 2])));
    let err = execute_to_json(&executor, "{ numbers { value } }", &Variables::new()).unwrap_err();
    match err {
        ExecutionError::SourceNotRecord { field_name, found } => {
            assert_eq!(field_name, "value");
            assert_eq!(found, "int");
        },
        other => panic!("Expected SourceNotRecord, got: {other:?}"),
    }
}

/// Leaf fields that hold records serialize them whole, using serialized
/// member names.
#[test]
fn leaf_record_serializes_whole() {
    let executor = Executor::new();
    executor.register_query_resolver("me", |_, _| {
        let mut user = User::new(5, "Eve");
        user.email = Some("eve@example.com".to_string());
        Ok(Resolved::value(user))
    });
    let result = execute_to_json(&executor, "{ me }", &Variables::new());
    assert_eq!(
        result.unwrap(),
        json!({"data": {"me": {
            "id": 5, "name": "Eve", "emailAddress": "eve@example.com", "friends": []
        }}}),
    );
}

// =============================================================================
// Failure semantics
// =============================================================================

#[test]
fn resolver_error_is_propagated() {
    let executor = executor_with_users();
    executor.register_query_resolver("broken", |_, _| Err("database unavailable".into()));

    let err = execute_to_json(&executor, "{ greet broken }", &Variables::new()).unwrap_err();
    match &err {
        ExecutionError::Resolver { field_name, source } => {
            assert_eq!(field_name, "broken");
            assert_eq!(source.to_string(), "database unavailable");
        },
        other => panic!("Expected Resolver, got: {other:?}"),
    }
    assert!(err.to_string().contains("database unavailable"));
}

/// A failure anywhere fails the whole call, and fields after the failing
/// one are never resolved.
#[test]
fn failure_is_all_or_nothing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let executor = Executor::new();
    let counter = Arc::clone(&calls);
    executor.register_query_resolver("counted", move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Resolved::value(true))
    });

    let result = execute_to_json(&executor, "{ counted missing counted }", &Variables::new());
    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn event_stream_from_query_is_rejected() {
    let executor = Executor::new();
    executor.register_query_resolver("ticks", |_, _| {
        let (_sender, events) = crate::EventStream::unbounded();
        Ok(Resolved::Events(events))
    });
    let err = execute_to_json(&executor, "{ ticks }", &Variables::new()).unwrap_err();
    assert!(
        matches!(err, ExecutionError::UnexpectedEventStream { ref field_name } if field_name == "ticks"),
        "{err:?}",
    );
}

// =============================================================================
// Variables and idempotence
// =============================================================================

/// The same parsed document runs with different bindings without
/// reparsing.
#[test]
fn variables_are_bound_at_execution_time() {
    let executor = Executor::new();
    executor.register_query_resolver("double", |_, args| {
        let n = args.get("n").and_then(Value::as_i64).unwrap_or(-1);
        Ok(Resolved::value(n * 2))
    });
    let document = parse_document("query Double($n: Int) { double(n: $n) }");

    let mut variables = Variables::new();
    variables.insert("n".to_string(), Value::Int(4));
    let first = executor.execute(&document, &variables).unwrap();
    variables.insert("n".to_string(), Value::Int(21));
    let second = executor.execute(&document, &variables).unwrap();
    let unbound = executor.execute(&document, &Variables::new()).unwrap();

    assert_eq!(first.get("double"), Some(&Value::Int(8)));
    assert_eq!(second.get("double"), Some(&Value::Int(42)));
    assert_eq!(unbound.get("double"), Some(&Value::Int(-2)));
}

#[test]
fn re_execution_is_idempotent() {
    let executor = executor_with_users();
    let document = parse_document("{ greet user { name friends { id name } } }");
    let first = executor.execute(&document, &Variables::new()).unwrap();
    let second = executor.execute(&document, &Variables::new()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.get("user"), second.get("user"));
}

/// Records in results compare structurally.
#[test]
fn response_equality_covers_records() {
    let executor = executor_with_users();
    let document = parse_document("{ user }");
    let response = executor.execute(&document, &Variables::new()).unwrap();
    assert_eq!(response.get("user"), Some(&Value::from(ada())));
}
