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

use std::sync::Arc;

use crate::converter::{Converter, expect_string};
use crate::error::Error;
use crate::options::JsonOptions;
use serde_json::Value;
use tempora_types::{TimeZone, ZoneProvider};

/// The converter for [TimeZone]: a JSON string holding the zone id,
/// resolved on read through the provider supplied at construction.
///
/// The id is a round-trip key, not a formatted value: writing emits the
/// zone's own id unchanged, and reading an id the provider does not
/// recognize fails with the provider's not-found error preserved as the
/// cause.
#[derive(Clone)]
pub struct TimeZoneConverter {
    provider: Arc<dyn ZoneProvider>,
}

impl TimeZoneConverter {
    /// Creates the converter with the provider used to resolve ids.
    pub fn new(provider: Arc<dyn ZoneProvider>) -> Self {
        Self { provider }
    }
}

impl std::fmt::Debug for TimeZoneConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeZoneConverter").finish_non_exhaustive()
    }
}

impl Converter<TimeZone> for TimeZoneConverter {
    fn read_value(&self, json: &Value, _options: &JsonOptions) -> Result<TimeZone, Error> {
        let id = expect_string(json, "TimeZone")?;
        Ok(self.provider.zone(id)?)
    }

    fn write_value(&self, value: &TimeZone, _options: &JsonOptions) -> Result<Value, Error> {
        Ok(Value::String(value.id().to_string()))
    }

    fn read_key(&self, key: &str, _options: &JsonOptions) -> Result<TimeZone, Error> {
        Ok(self.provider.zone(key)?)
    }

    fn write_key(&self, value: &TimeZone, _options: &JsonOptions) -> Result<String, Error> {
        Ok(value.id().to_string())
    }
}
