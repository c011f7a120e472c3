//! Shared fixtures for executor tests.

use crate::Executor;
use crate::Record;
use crate::RecordMember;
use crate::Resolved;
use crate::Value;
use crate::Variables;
use minigql_parser::ast;
use minigql_parser::parse_document;

/// A hand-written record with one renamed member (`email` serializes as
/// `emailAddress`).
#[derive(Clone, Debug)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub friends: Vec<User>,
}

impl User {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: None,
            friends: Vec::new(),
        }
    }
}

impl Record for User {
    fn type_name(&self) -> &str {
        "User"
    }

    fn members(&self) -> Vec<RecordMember<'_>> {
        vec![
            RecordMember::new("id"),
            RecordMember::new("name"),
            RecordMember::new("email").with_serialized_name("emailAddress"),
            RecordMember::new("friends"),
        ]
    }

    fn member_value(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.clone().into()),
            "email" => Some(self.email.clone().into()),
            "friends" => Some(self.friends.clone().into()),
            _ => None,
        }
    }
}

impl From<User> for Value {
    fn from(user: User) -> Self {
        Value::record(user)
    }
}

/// Ada, with an email address and two friends.
pub fn ada() -> User {
    User {
        id: 1,
        name: "Ada".to_string(),
        email: Some("ada@example.com".to_string()),
        friends: vec![User::new(2, "Grace"), User::new(3, "Alan")],
    }
}

/// An executor with `greet` and `user` query resolvers.
pub fn executor_with_users() -> Executor {
    let executor = Executor::new();
    executor.register_query_resolver("greet", |_, _| Ok(Resolved::value("Hello, World!")));
    executor.register_query_resolver("user", |_, _| Ok(Resolved::value(ada())));
    executor
}

/// Parses and executes `source`, returning the response as JSON.
pub fn execute_to_json(
    executor: &Executor,
    source: &str,
    variables: &Variables,
) -> Result<serde_json::Value, crate::ExecutionError> {
    let document = parse_document(source);
    let response = executor.execute(&document, variables)?;
    Ok(response.to_json().expect("response serializes"))
}

/// Parses `source` and returns the first top-level field of its first
/// operation.
pub fn first_field(source: &str) -> ast::Field {
    let document = parse_document(source);
    document
        .first_operation()
        .and_then(|operation| operation.selection_set.as_ref())
        .and_then(|selection_set| selection_set.fields().next())
        .cloned()
        .expect("document has a first field")
}
