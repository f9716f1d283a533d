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

use crate::converter::{Converter, expect_string};
use crate::error::Error;
use crate::options::JsonOptions;
use serde_json::Value;
use tempora_types::text::{InstantPattern, LocalDatePattern, Pattern};
use tempora_types::{DateInterval, Interval};

/// The ISO-8601 string converter for [Interval]: `"<start>/<end>"` with each
/// endpoint in the canonical extended ISO instant form.
///
/// An empty substring on either side of the slash denotes an open end. The
/// endpoint patterns are fixed; this converter never consults the registered
/// [Instant][tempora_types::Instant] converter. Being a single string, this
/// form is also valid as a JSON property name.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsoIntervalConverter;

impl IsoIntervalConverter {
    fn parse(text: &str) -> Result<Interval, Error> {
        let (start_text, end_text) = text.split_once('/').ok_or_else(|| {
            Error::InvalidData("expected an ISO-8601 interval; the slash was missing".into())
        })?;
        let pattern = InstantPattern::extended_iso();
        let start = match start_text {
            "" => None,
            _ => Some(pattern.parse(start_text)?),
        };
        let end = match end_text {
            "" => None,
            _ => Some(pattern.parse(end_text)?),
        };
        Interval::new(start, end).map_err(|e| Error::InvalidData(e.to_string()))
    }

    fn render(value: &Interval) -> String {
        let pattern = InstantPattern::extended_iso();
        let start = value.start().map(|s| pattern.format(&s)).unwrap_or_default();
        let end = value.end().map(|e| pattern.format(&e)).unwrap_or_default();
        format!("{start}/{end}")
    }
}

impl Converter<Interval> for IsoIntervalConverter {
    fn read_value(&self, json: &Value, _options: &JsonOptions) -> Result<Interval, Error> {
        Self::parse(expect_string(json, "Interval")?)
    }

    fn write_value(&self, value: &Interval, _options: &JsonOptions) -> Result<Value, Error> {
        Ok(Value::String(Self::render(value)))
    }

    fn read_key(&self, key: &str, _options: &JsonOptions) -> Result<Interval, Error> {
        Self::parse(key)
    }

    fn write_key(&self, value: &Interval, _options: &JsonOptions) -> Result<String, Error> {
        Ok(Self::render(value))
    }
}

/// The ISO-8601 string converter for [DateInterval]: `"<start>/<end>"` with
/// both endpoints mandatory, in the canonical `uuuu-MM-dd` form.
///
/// Dates have no "infinite" sentinel, so unlike [IsoIntervalConverter] an
/// empty endpoint is malformed input.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsoDateIntervalConverter;

impl IsoDateIntervalConverter {
    fn parse(text: &str) -> Result<DateInterval, Error> {
        let (start_text, end_text) = text.split_once('/').ok_or_else(|| {
            Error::InvalidData("expected an ISO-8601 date interval; the slash was missing".into())
        })?;
        let pattern = LocalDatePattern::iso();
        let start = pattern.parse(start_text)?;
        let end = pattern.parse(end_text)?;
        DateInterval::new(start, end).map_err(|e| Error::InvalidData(e.to_string()))
    }

    fn render(value: &DateInterval) -> String {
        let pattern = LocalDatePattern::iso();
        format!(
            "{}/{}",
            pattern.format(&value.start()),
            pattern.format(&value.end())
        )
    }
}

impl Converter<DateInterval> for IsoDateIntervalConverter {
    fn read_value(&self, json: &Value, _options: &JsonOptions) -> Result<DateInterval, Error> {
        Self::parse(expect_string(json, "DateInterval")?)
    }

    fn write_value(&self, value: &DateInterval, _options: &JsonOptions) -> Result<Value, Error> {
        Ok(Value::String(Self::render(value)))
    }

    fn read_key(&self, key: &str, _options: &JsonOptions) -> Result<DateInterval, Error> {
        Self::parse(key)
    }

    fn write_key(&self, value: &DateInterval, _options: &JsonOptions) -> Result<String, Error> {
        Ok(Self::render(value))
    }
}
