//! Conversion of argument literals from the AST into runtime [`Value`]s.
//!
//! There are two flavours. The lenient one ([`build_args`] /
//! [`build_value`]) never fails: a variable that was not provided becomes
//! `null` and a malformed integer becomes `0`. The strict one
//! ([`build_args_strict`] / [`resolve_argument`]) reports both of those as
//! [`ExecutionError`]s instead.

use crate::execution_error::ExecutionError;
use crate::value::Arguments;
use crate::value::Value;
use crate::variables::Variables;
use minigql_parser::ast;

/// Builds every argument of `field` with [`build_value`]. A repeated
/// argument name keeps its first position and its last value.
pub fn build_args(field: &ast::Field, variables: &Variables) -> Arguments {
    field
        .arguments
        .iter()
        .map(|arg| (arg.name.clone(), build_value(&arg.value, variables)))
        .collect()
}

/// Converts an AST value into a runtime value without ever failing.
pub fn build_value(value: &ast::Value, variables: &Variables) -> Value {
    match value {
        ast::Value::Variable(name) => variables.get(name).cloned().unwrap_or(Value::Null),
        ast::Value::Int(literal) => Value::Int(literal.parse().unwrap_or(0)),
        ast::Value::String(s) => Value::String(s.clone()),
        ast::Value::Boolean(b) => Value::Boolean(*b),
        ast::Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field_value)| (key.clone(), build_value(field_value, variables)))
                .collect(),
        ),
        ast::Value::Array(items) => {
            Value::List(items.iter().map(|item| build_value(item, variables)).collect())
        },
        ast::Value::Enum(literal) | ast::Value::Illegal(literal) => Value::String(literal.clone()),
    }
}

/// Builds every argument of `field` with [`resolve_argument`], stopping at
/// the first failure.
pub fn build_args_strict(
    field: &ast::Field,
    variables: &Variables,
) -> Result<Arguments, ExecutionError> {
    let mut args = Arguments::with_capacity(field.arguments.len());
    for arg in &field.arguments {
        args.insert(arg.name.clone(), resolve_argument(arg, variables)?);
    }
    Ok(args)
}

/// Converts one argument's value, failing on a missing variable or a
/// malformed integer literal.
pub fn resolve_argument(
    argument: &ast::Argument,
    variables: &Variables,
) -> Result<Value, ExecutionError> {
    resolve_value(&argument.value, variables)
}

fn resolve_value(value: &ast::Value, variables: &Variables) -> Result<Value, ExecutionError> {
    match value {
        ast::Value::Variable(name) => variables
            .get(name)
            .cloned()
            .ok_or_else(|| ExecutionError::VariableNotProvided { name: name.clone() }),
        ast::Value::Int(literal) => literal
            .parse()
            .map(Value::Int)
            .map_err(|source| ExecutionError::InvalidInt {
                literal: literal.clone(),
                source,
            }),
        ast::Value::Object(fields) => {
            let mut object = indexmap::IndexMap::with_capacity(fields.len());
            for (key, field_value) in fields {
                object.insert(key.clone(), resolve_value(field_value, variables)?);
            }
            Ok(Value::Object(object))
        },
        ast::Value::Array(items) => items
            .iter()
            .map(|item| resolve_value(item, variables))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        scalar => Ok(build_value(scalar, variables)),
    }
}
