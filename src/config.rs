// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as env_vars, DEFAULT_OUTPUT_FORMAT};
use crate::error::FieldPathError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::env;
use std::str::FromStr;

/// Format used to print documents and values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = FieldPathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(FieldPathError::InvalidOutputFormat(other.to_string())),
        }
    }
}

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables. An explicit `output`
    /// wins and the environment is not consulted for it.
    pub fn from_env(output: Option<OutputFormat>) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), output)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        output: Option<OutputFormat>,
    ) -> Result<Self> {
        let output_format = match output {
            Some(format) => format,
            None => lookup(env_vars::OUTPUT_FORMAT)
                .unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string())
                .parse::<OutputFormat>()
                .with_context(|| format!("{} has an invalid value", env_vars::OUTPUT_FORMAT))?,
        };

        Ok(Config { output_format })
    }
}
