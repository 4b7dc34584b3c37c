// SPDX-License-Identifier: MIT

//! Generic form model: a structured group of user-visible configuration
//! fields, with values partitioned per connection and per job.
//!
//! `MFramework` advertises a [`FormSchema`] per form; connections and jobs
//! store the corresponding [`FormValues`]. The actual decode from values
//! into a typed configuration object lives in `xfer-connector::form`, as a
//! small set of per-configuration-class decoders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The primitive types a form field may hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FormValue {
    Text(String),
    Boolean(bool),
    Integer(i64),
    /// A repeated key/value field (e.g. extra JDBC properties).
    Map(BTreeMap<String, String>),
}

/// Declares the shape of one recognized field without a value — part of the
/// schema `MFramework` registers, not of a particular connection/job row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Boolean,
    Integer,
    Map,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self { name: name.into(), kind, required }
    }
}

/// An ordered collection of field descriptors making up one form (e.g. a
/// connector's connection form, or its IMPORT job form).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema(pub Vec<FieldDescriptor>);

impl FormSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self(fields)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.0.iter().find(|f| f.name == name)
    }
}

/// Values filled in for one form, partitioned into a framework part and a
/// connector part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues(pub BTreeMap<String, FormValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FormValue) -> &mut Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.0.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            FormValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values_round_trip_through_insert_and_get() {
        let mut values = FormValues::new();
        values.insert("output_directory", FormValue::Text("/tmp/out".into()));
        assert_eq!(values.text("output_directory"), Some("/tmp/out"));
        assert_eq!(values.get("missing"), None);
    }

    #[test]
    fn schema_looks_up_field_by_name() {
        let schema = FormSchema::new(vec![FieldDescriptor::new(
            "output_directory",
            FieldKind::Text,
            true,
        )]);
        assert!(schema.field("output_directory").is_some());
        assert!(schema.field("nope").is_none());
    }
}
