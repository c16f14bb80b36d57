// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Get and set values at a dot-delimited path inside a [`Document`]

use crate::constants::PATH_SEPARATOR;
use serde_json::{Map, Value};
use tracing::debug;

/// A string-keyed mapping whose values are scalars or nested documents
pub type Document = Map<String, Value>;

/// Split a path into its parent segments and the final (leaf) segment
fn split_path(path: &str) -> (impl Iterator<Item = &str>, &str) {
    debug_assert!(!path.is_empty(), "field path must not be empty");

    let (parents, leaf) = match path.rsplit_once(PATH_SEPARATOR) {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, path),
    };
    (
        parents
            .into_iter()
            .flat_map(|p| p.split(PATH_SEPARATOR)),
        leaf,
    )
}

/// Name of a value's kind, for log and error messages
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Set `value` at `path`, creating intermediate documents as needed.
///
/// Any intermediate segment that holds something other than a document is
/// replaced by an empty document, and the final segment is overwritten
/// unconditionally.
pub fn set_nested_field(document: &mut Document, path: &str, value: Value) {
    let (parents, leaf) = split_path(path);

    let mut current = document;
    for segment in parents {
        let entry = current
            .entry(segment)
            .or_insert_with(|| Value::Object(Document::new()));

        if !entry.is_object() {
            debug!(
                "Replacing {} at segment '{}' of '{}' with an empty object",
                value_kind(entry),
                segment,
                path
            );
            *entry = Value::Object(Document::new());
        }

        let Some(child) = entry.as_object_mut() else {
            return;
        };
        current = child;
    }

    current.insert(leaf.to_string(), value);
}

/// Get the value at `path`, or `None` if any segment along it is missing or
/// an intermediate segment is not a document.
pub fn get_nested_field<'a>(document: &'a Document, path: &str) -> Option<&'a Value> {
    let (parents, leaf) = split_path(path);

    let mut current = document;
    for segment in parents {
        current = current.get(segment)?.as_object()?;
    }
    current.get(leaf)
}
