//! Conversion of argument literals into runtime [`Value`]s.
//!
//! Materialization never fails:
//!
//! - an unbound variable is [`Value::Null`];
//! - an integer literal that does not fit in an `i64` is `0`;
//! - enum and illegal literals pass through as strings.

use crate::Arguments;
use crate::Value;
use crate::Variables;
use minigql_parser::ast;

/// Materializes every argument of `field`, in source order. A repeated
/// argument name keeps its first position and its last value.
pub fn materialize_arguments(field: &ast::Field, variables: &Variables) -> Arguments {
    field
        .arguments
        .iter()
        .map(|argument| {
            (
                argument.name.clone(),
                materialize_value(&argument.value, variables),
            )
        })
        .collect()
}

/// Materializes a single argument literal against `variables`.
pub fn materialize_value(value: &ast::Value, variables: &Variables) -> Value {
    match value {
        ast::Value::Boolean(b) => Value::Boolean(*b),
        ast::Value::Enum(literal) | ast::Value::Illegal(literal) | ast::Value::String(literal) => {
            Value::String(literal.clone())
        },
        ast::Value::Int(literal) => Value::Int(literal.parse::<i64>().unwrap_or_else(|_| {
            log::debug!("Integer literal `{literal}` is not a valid 64-bit integer; using 0.");
            0
        })),
        ast::Value::List(items) => Value::List(
            items
                .iter()
                .map(|item| materialize_value(item, variables))
                .collect(),
        ),
        ast::Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), materialize_value(value, variables)))
                .collect(),
        ),
        ast::Value::Variable(name) => variables.get(name).cloned().unwrap_or_else(|| {
            log::trace!("Variable `${name}` is unbound; using null.");
            Value::Null
        }),
    }
}
