use crate::ast::Definition;
use crate::ast::OperationDefinition;
use crate::ast::TypeDefinition;

/// Root AST node: an ordered sequence of [`Definition`]s.
///
/// The parser never fails, so a `Document` may be empty or partial when the
/// input was malformed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// The identity string of this document: the identity of its first
    /// definition (operation name, else operation keyword, else type name),
    /// or `""` when the document has no definitions.
    pub fn identity(&self) -> &str {
        self.definitions
            .first()
            .map(Definition::identity)
            .unwrap_or("")
    }

    /// The first definition, if it is an operation.
    ///
    /// Only the first definition of a document is ever executed.
    pub fn first_operation(&self) -> Option<&OperationDefinition> {
        self.definitions.first().and_then(Definition::as_operation)
    }

    /// All operation definitions, in document order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(Definition::as_operation)
    }

    /// All type definitions, in document order.
    pub fn type_definitions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.definitions.iter().filter_map(Definition::as_type_definition)
    }

    /// Looks up the first type definition named `name`.
    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.type_definitions().find(|def| def.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
