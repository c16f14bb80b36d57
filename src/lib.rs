// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod fields;
pub mod unstructured;

pub use error::{FieldPathError, Result};
pub use fields::{get_nested_field, set_nested_field, Document, NestedFields};
