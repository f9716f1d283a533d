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

//! End-to-end tests for the compound annual-date representation.

mod common;

use common::{assert_conversions, default_options};
use serde_json::json;
use tempora_json::{Error, NamingPolicy};
use tempora_types::AnnualDate;
type Result = std::result::Result<(), Box<dyn std::error::Error>>;

#[test]
fn round_trip() -> Result {
    let options = default_options();
    assert_conversions(&options, &AnnualDate::new(7, 1)?, json!({"Month": 7, "Day": 1}));
    let json = options.serialize(&AnnualDate::new(7, 1)?)?;
    assert_eq!(serde_json::to_string(&json)?, r#"{"Month":7,"Day":1}"#);
    Ok(())
}

#[test]
fn round_trip_camel_case() -> Result {
    let options = default_options().with_naming_policy(NamingPolicy::CamelCase);
    assert_conversions(&options, &AnnualDate::new(2, 29)?, json!({"month": 2, "day": 29}));
    Ok(())
}

#[test]
fn missing_required_field_names_the_field() -> Result {
    let options = default_options();
    let err = options
        .deserialize::<AnnualDate>(&json!({"Month": 7}))
        .expect_err("a missing day must fail");
    assert!(matches!(err, Error::Conversion { type_name: "AnnualDate", .. }), "{err:?}");
    let cause = std::error::Error::source(&err).expect("cause must be preserved");
    assert!(cause.to_string().contains("day"), "{cause}");
    Ok(())
}

#[test]
fn unknown_properties_are_skipped() -> Result {
    let options = default_options();
    let json = json!({"Month": 7, "Observed": true, "Day": 1});
    assert_eq!(options.deserialize::<AnnualDate>(&json)?, AnnualDate::new(7, 1)?);
    Ok(())
}

#[test]
fn nullable_round_trip() -> Result {
    let options = default_options();
    assert_eq!(options.serialize_optional::<AnnualDate>(&None)?, json!(null));
    assert_eq!(options.deserialize_optional::<AnnualDate>(&json!(null))?, None);
    let value = Some(AnnualDate::new(7, 1)?);
    let json = options.serialize_optional(&value)?;
    assert_eq!(options.deserialize_optional::<AnnualDate>(&json)?, value);
    Ok(())
}
