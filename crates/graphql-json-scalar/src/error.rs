// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Error codes for the `extensions.code` field of a GraphQL error.
/// `<https://www.apollographql.com/docs/apollo-server/data/errors/#built-in-error-codes>`
pub mod code {
    pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
}

/// Message attached to a `JSON` input that could not be coerced, whether it was `null` or
/// malformed. The engine reports it against the offending variable or argument.
pub const INVALID_VALUE: &str = "Provided invalid value";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read config from {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config from {path:?}: {source}")]
    ConfigFormat {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Variables are not a valid JSON object: {0}")]
    Variables(String),
}
