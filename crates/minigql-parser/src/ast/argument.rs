use crate::ast::Value;

/// A `name: value` argument on a field.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}
