use crate::ast::TypeAnnotation;

/// A `$name: Type` variable definition on an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    /// The variable name without the `$` sigil. Never empty.
    pub name: String,
    /// Absent when the `: Type` part was missing or could not be parsed.
    pub type_annotation: Option<TypeAnnotation>,
}
