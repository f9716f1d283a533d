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

//! End-to-end tests for the ISO-8601 string interval representations.

mod common;

use common::{assert_conversions, default_options};
use serde_json::json;
use tempora_json::Error;
use tempora_types::{DateInterval, Duration, Instant, Interval, LocalDate};
type Result = std::result::Result<(), Box<dyn std::error::Error>>;

#[test]
fn interval_with_open_end() -> Result {
    let options = default_options().with_iso_interval_converter();
    let start = Instant::from_utc(2013, 6, 7, 8, 9, 10)?
        .plus(Duration::from_nanoseconds(123_456_789))?;
    let interval = Interval::new(Some(start), None)?;
    assert_conversions(&options, &interval, json!("2013-06-07T08:09:10.123456789Z/"));
    let read: Interval = options.deserialize(&json!("2013-06-07T08:09:10.123456789Z/"))?;
    assert!(read.has_start());
    assert!(!read.has_end());
    Ok(())
}

#[test]
fn interval_missing_slash_is_invalid() -> Result {
    let options = default_options().with_iso_interval_converter();
    let err = options
        .deserialize::<Interval>(&json!("2013-06-07T08:09:10Z"))
        .expect_err("an interval without a slash must fail");
    let cause = std::error::Error::source(&err).expect("cause must be preserved");
    assert!(cause.to_string().contains("slash"), "{cause}");
    Ok(())
}

#[test]
fn date_interval_iso_form() -> Result {
    let options = default_options().with_iso_date_interval_converter();
    let interval = DateInterval::new(LocalDate::new(2012, 1, 2)?, LocalDate::new(2013, 6, 7)?)?;
    assert_conversions(&options, &interval, json!("2012-01-02/2013-06-07"));
    Ok(())
}

#[test]
fn date_interval_iso_form_requires_both_ends() -> Result {
    let options = default_options().with_iso_date_interval_converter();
    let got = options.deserialize::<DateInterval>(&json!("2012-01-02/"));
    assert!(matches!(got, Err(Error::Conversion { .. })), "{got:?}");
    Ok(())
}

// Replacing the interval converter must not disturb the other converters.
#[test]
fn other_types_keep_their_converters() -> Result {
    let options = default_options()
        .with_iso_interval_converter()
        .with_iso_date_interval_converter();
    let instant = Instant::from_utc(2012, 1, 2, 3, 4, 5)?;
    assert_eq!(options.serialize(&instant)?, json!("2012-01-02T03:04:05Z"));
    Ok(())
}

#[test]
fn replacement_applied_twice_behaves_identically() -> Result {
    let options = default_options()
        .with_iso_interval_converter()
        .with_iso_interval_converter();
    let interval = Interval::new(None, None)?;
    assert_eq!(options.serialize(&interval)?, json!("/"));
    assert_eq!(options.deserialize::<Interval>(&json!("/"))?, interval);
    Ok(())
}
