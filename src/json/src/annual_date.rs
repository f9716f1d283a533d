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
use tempora_types::AnnualDate;

/// The compound converter for [AnnualDate]: a JSON object with mandatory
/// `Month` and `Day` integer properties.
///
/// Unrecognized properties are skipped on read; a missing `Month` or `Day`
/// is reported after the whole object has been read, naming the missing
/// field. Annual dates have no property-name form.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnnualDateConverter;

fn read_component(name: &str, value: &Value) -> Result<i64, Error> {
    value.as_i64().ok_or_else(|| Error::UnexpectedToken {
        type_name: "AnnualDate",
        expected: "Number",
        got: token_kind(value),
    })
    .and_then(|number| {
        if (0..=255).contains(&number) {
            Ok(number)
        } else {
            Err(Error::InvalidData(format!(
                "annual date {name} out of range: {number}"
            )))
        }
    })
}

impl Converter<AnnualDate> for AnnualDateConverter {
    fn read_value(&self, json: &Value, options: &JsonOptions) -> Result<AnnualDate, Error> {
        let object = json.as_object().ok_or_else(|| Error::UnexpectedToken {
            type_name: "AnnualDate",
            expected: "Object",
            got: token_kind(json),
        })?;
        let month_name = options.resolve_property_name("Month");
        let day_name = options.resolve_property_name("Day");
        let mut month: Option<i64> = None;
        let mut day: Option<i64> = None;
        for (name, value) in object {
            if options.property_names_match(name, &month_name) {
                month = Some(read_component("month", value)?);
            } else if options.property_names_match(name, &day_name) {
                day = Some(read_component("day", value)?);
            }
            // Unrecognized properties are skipped for forward compatibility.
        }
        let month =
            month.ok_or_else(|| Error::InvalidData("annual date is missing its month".into()))?;
        let day = day.ok_or_else(|| Error::InvalidData("annual date is missing its day".into()))?;
        AnnualDate::new(month as u8, day as u8).map_err(|e| Error::InvalidData(e.to_string()))
    }

    fn write_value(&self, value: &AnnualDate, options: &JsonOptions) -> Result<Value, Error> {
        let mut object = serde_json::Map::new();
        object.insert(
            options.resolve_property_name("Month"),
            Value::from(value.month()),
        );
        object.insert(
            options.resolve_property_name("Day"),
            Value::from(value.day()),
        );
        Ok(Value::Object(object))
    }
}
