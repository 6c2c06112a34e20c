// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use async_graphql::{Request, Response, Variables};
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::Error;
use crate::extensions::logger::Logger;

pub mod commands;
pub mod config;
pub mod error;
pub mod extensions;
pub mod scalars;
pub mod schema;

pub use scalars::json::Json;

/// Parse a variables payload, which must be a JSON object mapping variable names to values.
pub fn parse_variables(variables: &str) -> Result<Variables, Error> {
    let value: serde_json::Value =
        serde_json::from_str(variables).map_err(|e| Error::Variables(e.to_string()))?;

    if !value.is_object() {
        return Err(Error::Variables(format!("expected an object, found {value}")));
    }

    Ok(Variables::from_json(value))
}

/// Run `query` against the schema, with logging configured by `config`. Errors raised while
/// coercing inputs or resolving fields are reported in the response, not as an `Err`.
pub async fn execute(query: &str, variables: Variables, config: &ServiceConfig) -> Response {
    let schema = schema::schema()
        .extension(Logger::new(config.logging.clone()))
        .finish();

    debug!("Executing query with {} variable(s)", variables.len());
    schema.execute(Request::new(query).variables(variables)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let vars = parse_variables(r#"{ "json": "{\"a\": 1}" }"#).unwrap();
        assert_eq!(
            vars.get("json"),
            Some(&async_graphql::Value::from(r#"{"a": 1}"#))
        );

        assert!(matches!(parse_variables("{"), Err(Error::Variables(_))));
        assert!(matches!(parse_variables("[1]"), Err(Error::Variables(_))));
    }
}
