// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::*;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(
    name = "graphql-json",
    about = "GraphQL JSON scalar",
    rename_all = "kebab-case",
    author,
    version
)]
pub enum Command {
    /// Output a TOML config (suitable for passing into the --config parameter of the execute
    /// command) with all values set to their defaults.
    GenerateConfig {
        /// Optional path to an output file. Prints to `stdout` if not provided.
        output: Option<PathBuf>,
    },

    /// Output the schema in SDL form.
    ExportSchema {
        /// Optional path to an output file. Prints to `stdout` if not provided.
        output: Option<PathBuf>,
    },

    /// Execute a query against the schema and print the response as JSON.
    Execute {
        /// Path to a file containing the GraphQL query.
        #[clap(short, long)]
        query: PathBuf,

        /// Variables for the query, as a JSON object.
        #[clap(long, default_value = "{}")]
        variables: String,

        /// Path to TOML file containing configuration for the service.
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}
