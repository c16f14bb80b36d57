// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Separator between the segments of a field path
pub const PATH_SEPARATOR: char = '.';

/// Environment variables read by the command-line tool
pub mod env {
    /// Output format for printed documents ("yaml" or "json")
    pub const OUTPUT_FORMAT: &str = "FIELDPATH_OUTPUT_FORMAT";
}

/// Output format used when neither the flag nor the environment sets one
pub const DEFAULT_OUTPUT_FORMAT: &str = "yaml";
