// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Execution of command-line operations against a document

use crate::cli::Command;
use crate::config::OutputFormat;
use crate::error::{FieldPathError, Result};
use crate::fields::NestedFields;
use crate::unstructured::yaml_to_unstructured;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Run `command` against the document in `input` and render the output
#[instrument(skip(input))]
pub fn execute(command: &Command, input: &[u8], format: OutputFormat) -> Result<String> {
    let mut document = yaml_to_unstructured(input)?;

    match command {
        Command::Get { path } => {
            let value = document
                .nested_field(path)
                .ok_or_else(|| FieldPathError::FieldNotFound(path.clone()))?;
            debug!("Found value at '{}'", path);
            render(value, format)
        }
        Command::Set { path, value } => {
            let value = parse_value(value)?;
            document.set_nested_field(path, value);
            debug!("Set value at '{}'", path);
            render(&document, format)
        }
    }
}

/// Parse a command-line value as YAML so numbers, booleans and flow
/// collections keep their type
pub fn parse_value(raw: &str) -> Result<Value> {
    Ok(serde_yaml::from_str(raw)?)
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(value)?;
            out.push('\n');
            Ok(out)
        }
    }
}
