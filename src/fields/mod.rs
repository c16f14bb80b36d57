// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Dot-delimited field access into nested documents.

pub mod ext;
pub mod nested;

pub use ext::NestedFields;
pub use nested::{get_nested_field, set_nested_field, Document};
