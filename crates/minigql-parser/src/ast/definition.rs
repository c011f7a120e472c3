use crate::ast::OperationDefinition;
use crate::ast::TypeDefinition;

/// A top-level definition in a [`Document`](crate::ast::Document).
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Type(TypeDefinition),
}

impl Definition {
    /// Operation name (or operation keyword when unnamed) for operations;
    /// the type name for type definitions.
    pub fn identity(&self) -> &str {
        match self {
            Definition::Operation(op) => op.identity(),
            Definition::Type(def) => &def.name,
        }
    }

    pub fn as_operation(&self) -> Option<&OperationDefinition> {
        match self {
            Definition::Operation(op) => Some(op),
            Definition::Type(_) => None,
        }
    }

    pub fn as_type_definition(&self) -> Option<&TypeDefinition> {
        match self {
            Definition::Operation(_) => None,
            Definition::Type(def) => Some(def),
        }
    }

    /// A short description of this definition for diagnostics, e.g.
    /// ``query `GetUser` `` or ``type `User` ``.
    pub fn describe(&self) -> String {
        match self {
            Definition::Operation(op) => match &op.name {
                Some(name) => format!("{} `{name}`", op.kind),
                None => format!("anonymous {}", op.kind),
            },
            Definition::Type(def) => format!("type `{}`", def.name),
        }
    }
}
