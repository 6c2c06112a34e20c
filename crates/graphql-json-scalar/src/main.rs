// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use graphql_json_scalar::commands::Command;
use graphql_json_scalar::config::ServiceConfig;
use graphql_json_scalar::schema::export_schema;
use graphql_json_scalar::{execute, parse_variables};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Command::parse() {
        Command::GenerateConfig { output } => {
            let toml = toml::to_string_pretty(&ServiceConfig::default())
                .context("Failed to serialize default configuration to TOML.")?;
            write_output(output, &toml)?;
        }

        Command::ExportSchema { output } => {
            write_output(output, &export_schema())?;
        }

        Command::Execute {
            query,
            variables,
            config,
        } => {
            let config = match config {
                Some(path) => ServiceConfig::read(path)?,
                None => ServiceConfig::default(),
            };

            let query = fs::read_to_string(&query)
                .with_context(|| format!("Failed to read query from {}", query.display()))?;
            let variables = parse_variables(&variables)?;

            let response = execute(&query, variables, &config).await;
            println!(
                "{}",
                serde_json::to_string_pretty(&response).context("Failed to serialize response")?
            );
        }
    }

    Ok(())
}

fn write_output(output: Option<PathBuf>, contents: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        info!("Writing to {}", path.display());
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    } else {
        println!("{contents}");
    }
    Ok(())
}
