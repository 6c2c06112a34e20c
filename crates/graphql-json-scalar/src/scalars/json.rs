// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use async_graphql::{
    Description, InputValueError, InputValueResult, Name, Scalar, ScalarType, Value,
};
use serde::{Deserialize, Serialize};

use crate::error::{code, INVALID_VALUE};

/// An untyped JSON value: objects, arrays, strings, numbers, booleans and null. This subverts the
/// GraphQL type system, so it should only be used for fields and arguments whose shape genuinely
/// cannot be described in the schema.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Json(serde_json::Value);

impl Json {
    pub const DESCRIPTION: &'static str = "Represents untyped JSON";

    /// Coerce a GraphQL input value into JSON.
    ///
    /// Objects that the engine has already parsed (e.g. object-valued variables) are accepted as
    /// they are, without re-validating their contents. Strings are parsed as JSON text. Anything
    /// else, including `null` and strings that are not valid JSON, yields `None`.
    pub fn coerce_input(value: Value) -> Option<Self> {
        match value {
            Value::Object(_) => value.into_json().ok().map(Json),
            Value::String(s) => serde_json::from_str(&s).ok().map(Json),
            Value::Null
            | Value::Number(_)
            | Value::Boolean(_)
            | Value::List(_)
            | Value::Enum(_)
            | Value::Binary(_) => None,
        }
    }

    /// Coerce JSON into a GraphQL output value.
    ///
    /// A top-level object is serialized to compact JSON text, keeping its key order. Every other
    /// shape, including arrays, is returned as the equivalent native GraphQL value.
    pub fn coerce_result(&self) -> Value {
        match &self.0 {
            object @ serde_json::Value::Object(_) => Value::String(object.to_string()),
            other => native(other),
        }
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

#[Scalar(name = "JSON", use_type_description = true)]
impl ScalarType for Json {
    fn parse(value: Value) -> InputValueResult<Self> {
        Json::coerce_input(value).ok_or_else(|| {
            InputValueError::custom(INVALID_VALUE).with_extension("code", code::BAD_USER_INPUT)
        })
    }

    fn to_value(&self) -> Value {
        self.coerce_result()
    }
}

impl Description for Json {
    fn description() -> &'static str {
        Json::DESCRIPTION
    }
}

impl From<serde_json::Value> for Json {
    fn from(value: serde_json::Value) -> Self {
        Json(value)
    }
}

impl From<Json> for serde_json::Value {
    fn from(value: Json) -> Self {
        value.0
    }
}

fn native(value: &serde_json::Value) -> Value {
    use serde_json::Value as J;
    match value {
        J::Null => Value::Null,
        J::Bool(b) => Value::Boolean(*b),
        J::Number(n) => Value::Number(n.clone()),
        J::String(s) => Value::String(s.clone()),
        J::Array(items) => Value::List(items.iter().map(native).collect()),
        J::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (Name::new(k), native(v)))
                .collect(),
        ),
    }
}
