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
#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;
use tempora_json::{JsonOptions, JsonTemporal};
use tempora_types::FixedZoneProvider;

/// The zone provider used across the integration tests.
pub fn provider() -> Arc<FixedZoneProvider> {
    Arc::new(FixedZoneProvider::new([
        "Europe/London",
        "America/New_York",
        "America/Los_Angeles",
        "Etc/UTC",
    ]))
}

/// Options with every default converter registered.
pub fn default_options() -> JsonOptions {
    JsonOptions::new().configure_for_temporal(provider())
}

/// Asserts that `value` serializes to `json` and that `json` deserializes
/// back to `value`.
pub fn assert_conversions<T>(options: &JsonOptions, value: &T, json: Value)
where
    T: JsonTemporal + PartialEq + std::fmt::Debug,
{
    let written = options.serialize(value).expect("serialization must succeed");
    assert_eq!(written, json);
    let read = options
        .deserialize::<T>(&json)
        .expect("deserialization must succeed");
    assert_eq!(&read, value);
}
