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

use crate::converter::{Converter, token_kind};
use crate::error::Error;
use crate::options::JsonOptions;
use serde_json::Value;
use tempora_types::{Instant, Interval};

/// The compound converter for [Interval]: a JSON object with `Start` and
/// `End` properties, each an instant in the representation of the registered
/// [Instant] converter.
///
/// Either property may be omitted, representing an open end; an absent end
/// is omitted on write rather than written as null. Unrecognized properties
/// are skipped on read so documents from newer producers still convert.
///
/// This shape has no property-name form; using an interval as a map key is
/// an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalConverter;

impl Converter<Interval> for IntervalConverter {
    fn read_value(&self, json: &Value, options: &JsonOptions) -> Result<Interval, Error> {
        let object = json.as_object().ok_or_else(|| Error::UnexpectedToken {
            type_name: "Interval",
            expected: "Object",
            got: token_kind(json),
        })?;
        let start_name = options.resolve_property_name("Start");
        let end_name = options.resolve_property_name("End");
        let mut start: Option<Instant> = None;
        let mut end: Option<Instant> = None;
        for (name, value) in object {
            if options.property_names_match(name, &start_name) {
                start = Some(options.deserialize(value)?);
            } else if options.property_names_match(name, &end_name) {
                end = Some(options.deserialize(value)?);
            }
            // Unrecognized properties are skipped for forward compatibility.
        }
        Interval::new(start, end).map_err(|e| Error::InvalidData(e.to_string()))
    }

    fn write_value(&self, value: &Interval, options: &JsonOptions) -> Result<Value, Error> {
        let mut object = serde_json::Map::new();
        if let Some(start) = value.start() {
            object.insert(
                options.resolve_property_name("Start"),
                options.serialize(&start)?,
            );
        }
        if let Some(end) = value.end() {
            object.insert(
                options.resolve_property_name("End"),
                options.serialize(&end)?,
            );
        }
        Ok(Value::Object(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters;
    use serde_json::json;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    fn options() -> JsonOptions {
        JsonOptions::new()
            .with_converter(converters::instant_converter())
            .with_converter(converters::interval_converter())
    }

    #[test]
    fn end_before_start_is_invalid_data() {
        let json = json!({
            "Start": "2013-06-07T08:09:10Z",
            "End": "2012-01-02T03:04:05Z",
        });
        let got = IntervalConverter.read_value(&json, &options());
        assert!(matches!(got, Err(Error::InvalidData(_))), "{got:?}");
    }

    #[test]
    fn null_endpoint_is_rejected() {
        let json = json!({ "Start": null });
        let got = IntervalConverter.read_value(&json, &options());
        assert!(matches!(got, Err(Error::UnexpectedNull(_))), "{got:?}");
    }

    #[test]
    fn intervals_cannot_be_property_names() -> Result {
        let interval = Interval::new(None, None)?;
        let got = IntervalConverter.write_key(&interval, &options());
        assert!(matches!(got, Err(Error::InvalidPropertyName("Interval"))), "{got:?}");
        let got = IntervalConverter.read_key("{}", &options());
        assert!(matches!(got, Err(Error::InvalidPropertyName("Interval"))), "{got:?}");
        Ok(())
    }
}
