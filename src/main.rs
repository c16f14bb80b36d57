// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kube_fieldpath::cli::Cli;
use kube_fieldpath::commands::execute;
use kube_fieldpath::config::Config;

fn main() -> Result<()> {
    // Initialize tracing on stderr so stdout only carries the document
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration, the command line wins over the environment
    let config = Config::from_env(cli.output)?;
    let format = config.output_format;
    info!("Running {:?} with output format {:?}", cli.command, format);

    let input = match &cli.file {
        Some(path) => {
            debug!("Reading document from {}", path.display());
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            debug!("Reading document from stdin");
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let output = execute(&cli.command, &input, format)?;

    io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}
