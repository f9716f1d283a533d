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
use tempora_types::{DateInterval, LocalDate};

/// The compound converter for [DateInterval]: a JSON object with mandatory
/// `Start` and `End` properties, each a date in the representation of the
/// registered [LocalDate] converter.
///
/// Unrecognized properties are skipped on read; a missing `Start` or `End`
/// is reported after the whole object has been read, naming the missing
/// field. Date intervals have no property-name form.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateIntervalConverter;

impl Converter<DateInterval> for DateIntervalConverter {
    fn read_value(&self, json: &Value, options: &JsonOptions) -> Result<DateInterval, Error> {
        let object = json.as_object().ok_or_else(|| Error::UnexpectedToken {
            type_name: "DateInterval",
            expected: "Object",
            got: token_kind(json),
        })?;
        let start_name = options.resolve_property_name("Start");
        let end_name = options.resolve_property_name("End");
        let mut start: Option<LocalDate> = None;
        let mut end: Option<LocalDate> = None;
        for (name, value) in object {
            if options.property_names_match(name, &start_name) {
                start = Some(options.deserialize(value)?);
            } else if options.property_names_match(name, &end_name) {
                end = Some(options.deserialize(value)?);
            }
            // Unrecognized properties are skipped for forward compatibility.
        }
        let start = start.ok_or_else(|| {
            Error::InvalidData("date interval is missing its start date".into())
        })?;
        let end = end
            .ok_or_else(|| Error::InvalidData("date interval is missing its end date".into()))?;
        DateInterval::new(start, end).map_err(|e| Error::InvalidData(e.to_string()))
    }

    fn write_value(&self, value: &DateInterval, options: &JsonOptions) -> Result<Value, Error> {
        let mut object = serde_json::Map::new();
        object.insert(
            options.resolve_property_name("Start"),
            options.serialize(&value.start())?,
        );
        object.insert(
            options.resolve_property_name("End"),
            options.serialize(&value.end())?,
        );
        Ok(Value::Object(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters;
    use serde_json::json;
    use test_case::test_case;

    fn options() -> JsonOptions {
        JsonOptions::new()
            .with_converter(converters::local_date_converter())
            .with_converter(converters::date_interval_converter())
    }

    #[test_case(json!({"End": "2013-06-07"}), "start"; "missing start")]
    #[test_case(json!({"Start": "2012-01-02"}), "end"; "missing end")]
    #[test_case(json!({}), "start"; "missing both reports start first")]
    fn missing_fields_name_the_field(json: Value, field: &str) {
        match DateIntervalConverter.read_value(&json, &options()) {
            Err(Error::InvalidData(message)) => {
                assert!(message.contains(field), "{message}")
            }
            other => panic!("expected invalid-data error, got {other:?}"),
        }
    }

    #[test]
    fn end_before_start_is_invalid_data() {
        let json = json!({"Start": "2013-06-07", "End": "2012-01-02"});
        let got = DateIntervalConverter.read_value(&json, &options());
        assert!(matches!(got, Err(Error::InvalidData(_))), "{got:?}");
    }

    #[test]
    fn date_intervals_cannot_be_property_names() {
        let interval = DateInterval::new(
            LocalDate::new(2012, 1, 2).unwrap(),
            LocalDate::new(2013, 6, 7).unwrap(),
        )
        .unwrap();
        let got = DateIntervalConverter.write_key(&interval, &options());
        assert!(
            matches!(got, Err(Error::InvalidPropertyName("DateInterval"))),
            "{got:?}"
        );
    }
}
