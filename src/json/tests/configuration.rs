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

//! End-to-end tests for the configuration surface: the settings bag, slot
//! suppression, and nullability handling.

mod common;

use common::{default_options, provider};
use serde_json::json;
use tempora_json::{Error, JsonOptions, JsonSettings, converters};
use tempora_types::{Duration, LocalDate, Period};
type Result = std::result::Result<(), Box<dyn std::error::Error>>;

#[test]
fn settings_overrides_apply() -> Result {
    let mut settings = JsonSettings::new(provider());
    settings.duration_converter = Some(converters::roundtrip_duration_converter());
    let options = JsonOptions::new().configure_with(settings);
    let duration = Duration::from_hours(48) + Duration::from_seconds(3);
    assert_eq!(options.serialize(&duration)?, json!("2:00:00:03"));
    Ok(())
}

#[test]
fn suppressed_slot_leaves_type_unregistered() -> Result {
    let mut settings = JsonSettings::new(provider());
    settings.period_converter = None;
    let options = JsonOptions::new().configure_with(settings);
    let got = options.serialize(&Period::from_days(1));
    assert!(matches!(got, Err(Error::NotRegistered("Period"))), "{got:?}");
    // Everything else stays registered.
    assert_eq!(options.serialize(&Duration::from_hours(1))?, json!("1:00:00"));
    Ok(())
}

#[test]
fn null_handling_for_nullable_targets() -> Result {
    let options = default_options();
    assert_eq!(options.deserialize_optional::<LocalDate>(&json!(null))?, None);
    // The empty string is an explicit absence marker, same as null.
    assert_eq!(options.deserialize_optional::<LocalDate>(&json!(""))?, None);
    let value = Some(LocalDate::new(2012, 1, 2)?);
    assert_eq!(options.serialize_optional(&value)?, json!("2012-01-02"));
    assert_eq!(
        options.deserialize_optional::<LocalDate>(&json!("2012-01-02"))?,
        value
    );
    Ok(())
}

#[test]
fn null_rejected_for_non_nullable_targets() -> Result {
    let options = default_options();
    let got = options.deserialize::<LocalDate>(&json!(null));
    assert!(matches!(got, Err(Error::UnexpectedNull("LocalDate"))), "{got:?}");
    let got = options.deserialize::<LocalDate>(&json!(""));
    assert!(matches!(got, Err(Error::UnexpectedNull("LocalDate"))), "{got:?}");
    Ok(())
}

#[test]
fn compound_types_rejected_as_map_keys() -> Result {
    let options = default_options();
    let interval = tempora_types::Interval::new(None, None)?;
    let got = options.serialize_key(&interval);
    assert!(matches!(got, Err(Error::InvalidPropertyName("Interval"))), "{got:?}");
    Ok(())
}

#[test]
fn single_token_types_accepted_as_map_keys() -> Result {
    let options = default_options();
    let key = options.serialize_key(&LocalDate::new(2012, 1, 2)?)?;
    assert_eq!(key, "2012-01-02");
    Ok(())
}
