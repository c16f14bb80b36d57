// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldPathError {
    #[error("JSON conversion error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Expected an object, found {0}")]
    NotAnObject(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}

pub type Result<T> = std::result::Result<T, FieldPathError>;
