use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;

/// A query, mutation or subscription.
///
/// An operation written as a bare `{ ... }` has kind
/// [`Query`](OperationKind::Query), no name and no variable definitions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    /// Absent only when the input ended (or went wrong) before the operation's
    /// `{`. The execution engine treats an absent selection set as empty.
    pub selection_set: Option<SelectionSet>,
}

impl OperationDefinition {
    /// The operation name, or the operation keyword when unnamed.
    pub fn identity(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Looks up a variable definition by name (without the `$`).
    pub fn variable_definition(&self, name: &str) -> Option<&VariableDefinition> {
        self.variable_definitions.iter().find(|def| def.name == name)
    }
}
