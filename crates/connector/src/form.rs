// SPDX-License-Identifier: MIT

//! The generic form materializer.
//!
//! Decodes form values against the small field-descriptor schema
//! `MFramework`/the connector registry expose, producing a
//! `serde_json::Value` object that the execution engine and connector
//! callbacks can deserialize into their own concrete config structs.
//! Generic over the schema rather than over any one configuration type.

use serde_json::{Map, Value};
use thiserror::Error;
use xfer_core::{FieldKind, FormSchema, FormValue, FormValues};

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("required field {0} has no value")]
    MissingRequired(String),
    #[error("field {field} expected kind {expected:?}, got a different value shape")]
    KindMismatch { field: String, expected: FieldKind },
}

/// Decode `values` against `schema` into a JSON object, validating
/// required-ness and that each present value matches its declared kind.
/// Fields absent from `schema` but present in `values` pass through
/// unchanged (forward compatibility with connector-private extensions).
pub fn materialize(schema: &FormSchema, values: &FormValues) -> Result<Value, MaterializeError> {
    let mut out = Map::new();

    for field in &schema.0 {
        match values.get(&field.name) {
            Some(value) => {
                check_kind(field.name.as_str(), field.kind, value)?;
                out.insert(field.name.clone(), form_value_to_json(value));
            }
            None if field.required => {
                return Err(MaterializeError::MissingRequired(field.name.clone()));
            }
            None => {}
        }
    }

    // Pass through anything not named in the schema (connector-private keys).
    for (name, value) in &values.0 {
        if !out.contains_key(name) {
            out.insert(name.clone(), form_value_to_json(value));
        }
    }

    Ok(Value::Object(out))
}

fn check_kind(field: &str, expected: FieldKind, value: &FormValue) -> Result<(), MaterializeError> {
    let matches = matches!(
        (expected, value),
        (FieldKind::Text, FormValue::Text(_))
            | (FieldKind::Boolean, FormValue::Boolean(_))
            | (FieldKind::Integer, FormValue::Integer(_))
            | (FieldKind::Map, FormValue::Map(_))
    );
    if matches {
        Ok(())
    } else {
        Err(MaterializeError::KindMismatch { field: field.to_string(), expected })
    }
}

fn form_value_to_json(value: &FormValue) -> Value {
    match value {
        FormValue::Text(s) => Value::String(s.clone()),
        FormValue::Boolean(b) => Value::Bool(*b),
        FormValue::Integer(i) => Value::Number((*i).into()),
        FormValue::Map(m) => {
            Value::Object(m.iter().map(|(k, v)| (k.clone(), Value::String(v.clone()))).collect())
        }
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
