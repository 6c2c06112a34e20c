// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema, SchemaBuilder, SimpleObject};

use crate::scalars::json::Json;

pub struct Query;

/// The contents of a JSON object, as parsed by the `JSON` scalar.
#[derive(SimpleObject, Clone, Debug)]
pub struct JsonObject {
    /// The object's keys, in the order they were written.
    keys: Vec<String>,

    /// The object's values, in the same order as `keys`.
    values: Vec<Json>,

    /// The object itself, echoed back as JSON text.
    json: Json,
}

#[Object]
impl Query {
    /// Parse `json` and break it down into its keys and values.
    ///
    /// Returns `null` if `json` is valid JSON but not an object.
    async fn parse_json(&self, json: Json) -> Option<JsonObject> {
        JsonObject::new(json)
    }
}

impl JsonObject {
    fn new(json: Json) -> Option<Self> {
        let serde_json::Value::Object(fields) = json.as_value() else {
            return None;
        };

        let keys = fields.keys().cloned().collect();
        let values = fields.values().cloned().map(Json::from).collect();
        Some(Self { keys, values, json })
    }
}

/// The schema exercising the `JSON` scalar, without any extensions or context added.
pub fn schema() -> SchemaBuilder<Query, EmptyMutation, EmptySubscription> {
    Schema::build(Query, EmptyMutation, EmptySubscription)
}

/// The schema in SDL form.
pub fn export_schema() -> String {
    schema().finish().sdl()
}
