// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line argument definitions

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read and write dot-delimited fields of YAML/JSON resources
#[derive(Parser, Debug)]
#[command(name = "kube-fieldpath")]
#[command(version)]
pub struct Cli {
    /// Document to read; stdin when omitted
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Output format, overriding FIELDPATH_OUTPUT_FORMAT
    #[arg(short, long, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the value at PATH
    Get {
        /// Dot-delimited field path, e.g. spec.template.metadata.labels
        path: String,
    },
    /// Set PATH to VALUE and print the resulting document
    Set {
        /// Dot-delimited field path
        path: String,
        /// Value, parsed as YAML (`3`, `true`, `{app: web}`, `text`)
        value: String,
    },
}
