// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{Error, short_type_name};
use crate::options::JsonOptions;
use serde_json::Value;

/// One value type's mapping to and from JSON.
///
/// Implementations only handle non-null values: nullability (JSON null and
/// the empty string, both of which mark an absent value) is handled once by
/// the [JsonOptions] entry points, as is the uniform wrapping of read
/// failures. Converters are immutable after construction and shared behind
/// [Arc][std::sync::Arc].
///
/// The property-name hooks exist for map keys. By default they reject the
/// type: only types with a single-token text form override them.
pub trait Converter<T>: Send + Sync {
    /// Converts a non-null JSON value into `T`.
    fn read_value(&self, json: &Value, options: &JsonOptions) -> Result<T, Error>;

    /// Converts `value` into JSON.
    fn write_value(&self, value: &T, options: &JsonOptions) -> Result<Value, Error>;

    /// Converts a JSON property name into `T`.
    fn read_key(&self, _key: &str, _options: &JsonOptions) -> Result<T, Error> {
        Err(Error::InvalidPropertyName(short_type_name::<T>()))
    }

    /// Converts `value` into a JSON property name.
    fn write_key(&self, _value: &T, _options: &JsonOptions) -> Result<String, Error> {
        Err(Error::InvalidPropertyName(short_type_name::<T>()))
    }
}

/// The display name of a JSON token kind, for error messages.
pub(crate) fn token_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// Requires `json` to be a string token.
pub(crate) fn expect_string<'a>(json: &'a Value, type_name: &'static str) -> Result<&'a str, Error> {
    json.as_str().ok_or_else(|| Error::UnexpectedToken {
        type_name,
        expected: "String",
        got: token_kind(json),
    })
}
