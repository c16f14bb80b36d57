// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion between typed resources, YAML and unstructured documents.

pub mod convert;

pub use convert::{to_dynamic_object, to_typed, to_unstructured, yaml_to_unstructured};
