use minigql_parser::ast::OperationKind;
use std::sync::Arc;
use thiserror::Error;

/// Why an execution call failed.
///
/// Each error ends the one `execute`/`execute_subscription` call that raised
/// it; no partial result is returned and nothing is retried.
#[derive(Clone, Debug, Error)]
pub enum ExecutionError {
    #[error("The document has no definitions to execute.")]
    NoDefinitions,

    #[error(
        "Only operations can be executed, but the document's first definition \
        is {definition}."
    )]
    UnsupportedDefinition { definition: String },

    #[error("No query or mutation resolver is registered for field `{field_name}`.")]
    NoResolver { field_name: String },

    #[error("Type `{type_name}` has no member matching field `{field_name}`.")]
    NoMatchingMember {
        field_name: String,
        type_name: String,
    },

    #[error(
        "Cannot select field `{field_name}` on a {found} value; only records \
        have selectable members."
    )]
    SourceNotRecord {
        field_name: String,
        found: &'static str,
    },

    #[error("Cannot select field `{field_name}` on a null value.")]
    SourceNull { field_name: String },

    #[error("No subscription resolver is registered for field `{field_name}`.")]
    NoSubscriptionResolver { field_name: String },

    #[error(
        "The subscription resolver for field `{field_name}` returned a plain \
        value instead of an event stream."
    )]
    NotAnEventStream { field_name: String },

    #[error("The resolver for field `{field_name}` failed: {source}")]
    Resolver {
        field_name: String,
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    #[error(
        "The resolver for field `{field_name}` returned an event stream, but \
        only subscriptions can deliver events."
    )]
    UnexpectedEventStream { field_name: String },

    #[error(
        "Expected a subscription, but the document's first operation is a \
        {operation_kind}."
    )]
    NotASubscription { operation_kind: OperationKind },

    #[error("The subscription operation does not select any field.")]
    EmptySubscription,
}

impl ExecutionError {
    /// The field the error is about, when there is one.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            ExecutionError::NoResolver { field_name }
            | ExecutionError::NoMatchingMember { field_name, .. }
            | ExecutionError::SourceNotRecord { field_name, .. }
            | ExecutionError::SourceNull { field_name }
            | ExecutionError::NoSubscriptionResolver { field_name }
            | ExecutionError::NotAnEventStream { field_name }
            | ExecutionError::Resolver { field_name, .. }
            | ExecutionError::UnexpectedEventStream { field_name } => Some(field_name),

            ExecutionError::NoDefinitions
            | ExecutionError::UnsupportedDefinition { .. }
            | ExecutionError::NotASubscription { .. }
            | ExecutionError::EmptySubscription => None,
        }
    }
}
