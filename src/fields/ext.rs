// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Method-style field access for documents, JSON values and dynamic objects

use super::nested::{get_nested_field, set_nested_field, value_kind, Document};
use kube::core::DynamicObject;
use serde_json::Value;
use tracing::debug;

/// Dot-delimited field access on anything that holds a [`Document`]
pub trait NestedFields {
    /// Set `value` at `path`, replacing whatever stands in the way
    fn set_nested_field(&mut self, path: &str, value: Value);

    /// Get the value at `path`, if there is one
    fn nested_field(&self, path: &str) -> Option<&Value>;
}

impl NestedFields for Document {
    fn set_nested_field(&mut self, path: &str, value: Value) {
        set_nested_field(self, path, value)
    }

    fn nested_field(&self, path: &str) -> Option<&Value> {
        get_nested_field(self, path)
    }
}

/// A value that is not an object has no fields; writing through it turns it
/// into one.
impl NestedFields for Value {
    fn set_nested_field(&mut self, path: &str, value: Value) {
        if !self.is_object() {
            debug!(
                "Replacing {} root with an empty object to set '{}'",
                value_kind(self),
                path
            );
            *self = Value::Object(Document::new());
        }
        if let Value::Object(document) = self {
            set_nested_field(document, path, value);
        }
    }

    fn nested_field(&self, path: &str) -> Option<&Value> {
        get_nested_field(self.as_object()?, path)
    }
}

/// Paths are relative to the object's data, i.e. everything except
/// `apiVersion`, `kind` and `metadata`.
impl NestedFields for DynamicObject {
    fn set_nested_field(&mut self, path: &str, value: Value) {
        self.data.set_nested_field(path, value)
    }

    fn nested_field(&self, path: &str) -> Option<&Value> {
        self.data.nested_field(path)
    }
}
