use crate::ast::Argument;
use crate::ast::SelectionSet;

/// A selected field.
///
/// A field without a nested selection set is a leaf whose resolved value is
/// returned as-is; a field with one must resolve to a record (or a list of
/// records) whose members are selected recursively.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// Creates a leaf field with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Looks up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    pub fn is_leaf(&self) -> bool {
        self.selection_set.is_none()
    }
}
