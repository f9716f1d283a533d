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

//! End-to-end tests for the compound date-interval representation.

mod common;

use common::{assert_conversions, default_options};
use serde_json::json;
use tempora_json::{Error, NamingPolicy};
use tempora_types::{DateInterval, LocalDate};
type Result = std::result::Result<(), Box<dyn std::error::Error>>;

fn sample() -> DateInterval {
    DateInterval::new(
        LocalDate::new(2012, 1, 2).unwrap(),
        LocalDate::new(2013, 6, 7).unwrap(),
    )
    .unwrap()
}

#[test]
fn round_trip_pascal_case() -> Result {
    let options = default_options();
    assert_conversions(
        &options,
        &sample(),
        json!({"Start": "2012-01-02", "End": "2013-06-07"}),
    );
    let json = options.serialize(&sample())?;
    assert_eq!(
        serde_json::to_string(&json)?,
        r#"{"Start":"2012-01-02","End":"2013-06-07"}"#
    );
    Ok(())
}

#[test]
fn round_trip_camel_case() -> Result {
    let options = default_options().with_naming_policy(NamingPolicy::CamelCase);
    assert_conversions(
        &options,
        &sample(),
        json!({"start": "2012-01-02", "end": "2013-06-07"}),
    );
    let json = options.serialize(&sample())?;
    assert_eq!(
        serde_json::to_string(&json)?,
        r#"{"start":"2012-01-02","end":"2013-06-07"}"#
    );
    Ok(())
}

#[test]
fn missing_required_field_names_the_field() -> Result {
    let options = default_options();
    let err = options
        .deserialize::<DateInterval>(&json!({"Start": "2012-01-02"}))
        .expect_err("a missing end date must fail");
    assert!(matches!(err, Error::Conversion { type_name: "DateInterval", .. }), "{err:?}");
    let cause = std::error::Error::source(&err).expect("cause must be preserved");
    assert!(cause.to_string().contains("end date"), "{cause}");
    Ok(())
}

#[test]
fn unknown_properties_are_skipped() -> Result {
    let options = default_options();
    let json = json!({
        "Start": "2012-01-02",
        "Label": "fiscal year",
        "End": "2013-06-07",
    });
    assert_eq!(options.deserialize::<DateInterval>(&json)?, sample());
    Ok(())
}
