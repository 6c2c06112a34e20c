// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::extensions::logger::LoggerConfig;

/// Configuration for serving the schema. Every field may be omitted from the TOML source, in which
/// case it takes its value from `ServiceConfig::default()`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ServiceConfig {
    pub logging: LoggerConfig,
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| Error::ConfigFormat {
            path: path.to_owned(),
            source,
        })
    }
}
