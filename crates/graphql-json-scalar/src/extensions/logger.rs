// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Write, sync::Arc};

use async_graphql::{
    extensions::{
        Extension, ExtensionContext, ExtensionFactory, NextExecute, NextParseQuery, NextValidation,
    },
    parser::types::{ExecutableDocument, OperationType, Selection},
    PathSegment, Response, ServerError, ServerResult, ValidationResult, Variables,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct LoggerConfig {
    /// Log each request's query, with its variables.
    pub log_request_query: bool,

    /// Log the data of successful responses.
    pub log_response: bool,

    /// Log the complexity and depth computed during validation.
    pub log_complexity: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_request_query: true,
            log_response: true,
            log_complexity: true,
        }
    }
}

/// Logs the lifecycle of every request that reaches the schema. Each request is tagged with a
/// fresh session id so its query, validation and response lines can be correlated.
#[derive(Clone, Debug, Default)]
pub struct Logger {
    config: LoggerConfig,
}

struct LoggerExtension {
    session_id: Uuid,
    config: LoggerConfig,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }
}

impl ExtensionFactory for Logger {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(LoggerExtension {
            session_id: Uuid::new_v4(),
            config: self.config.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Extension for LoggerExtension {
    async fn parse_query(
        &self,
        ctx: &ExtensionContext<'_>,
        query: &str,
        variables: &Variables,
        next: NextParseQuery<'_>,
    ) -> ServerResult<ExecutableDocument> {
        let document = next.run(ctx, query, variables).await?;
        if self.config.log_request_query && !is_schema_query(&document) {
            info!(
                target: "async-graphql",
                "[Query] {}: {}", self.session_id, ctx.stringify_execute_doc(&document, variables)
            );
        }
        Ok(document)
    }

    async fn validation(
        &self,
        ctx: &ExtensionContext<'_>,
        next: NextValidation<'_>,
    ) -> Result<ValidationResult, Vec<ServerError>> {
        let res = next.run(ctx).await?;
        if self.config.log_complexity {
            info!(
                target: "async-graphql",
                complexity = res.complexity,
                depth = res.depth,
                "[Validation] {}", self.session_id,
            );
        }
        Ok(res)
    }

    async fn execute(
        &self,
        ctx: &ExtensionContext<'_>,
        operation_name: Option<&str>,
        next: NextExecute<'_>,
    ) -> Response {
        let resp = next.run(ctx, operation_name).await;
        if resp.is_err() {
            for err in &resp.errors {
                if err.path.is_empty() {
                    error!(
                        target: "async-graphql",
                        "[Response] {}: message={}", self.session_id, err.message,
                    );
                } else {
                    error!(
                        target: "async-graphql",
                        "[Response] {}: path={} message={}",
                        self.session_id,
                        dotted_path(&err.path),
                        err.message,
                    );
                }
            }
        } else if self.config.log_response {
            info!(
                target: "async-graphql",
                "[Response] {}: {}", self.session_id, resp.data
            );
        }
        resp
    }
}

/// Whether any query operation in `document` selects `__schema` (a full introspection query).
fn is_schema_query(document: &ExecutableDocument) -> bool {
    document
        .operations
        .iter()
        .filter(|(_, operation)| operation.node.ty == OperationType::Query)
        .any(|(_, operation)| {
            operation.node.selection_set.node.items.iter().any(|selection| {
                matches!(&selection.node, Selection::Field(field) if field.node.name.node == "__schema")
            })
        })
}

fn dotted_path(path: &[PathSegment]) -> String {
    let mut dotted = String::new();
    for (idx, segment) in path.iter().enumerate() {
        if idx > 0 {
            dotted.push('.');
        }
        let _ = match segment {
            PathSegment::Index(i) => write!(&mut dotted, "{i}"),
            PathSegment::Field(name) => write!(&mut dotted, "{name}"),
        };
    }
    dotted
}

#[cfg(test)]
mod tests {
    use async_graphql::parser::parse_query;

    use super::*;

    #[test]
    fn test_dotted_path() {
        let path = vec![
            PathSegment::Field("parseJson".to_string()),
            PathSegment::Index(3),
            PathSegment::Field("keys".to_string()),
        ];
        assert_eq!(dotted_path(&path), "parseJson.3.keys");
        assert_eq!(dotted_path(&[]), "");
    }

    #[test]
    fn test_schema_query_detection() {
        let doc = parse_query("{ __schema { types { name } } }").unwrap();
        assert!(is_schema_query(&doc));

        let doc = parse_query(r#"{ __type(name: "JSON") { name } }"#).unwrap();
        assert!(!is_schema_query(&doc));

        let doc = parse_query(r#"query($json: JSON!) { parseJson(json: $json) { keys } }"#)
            .unwrap();
        assert!(!is_schema_query(&doc));
    }
}
