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

//! End-to-end tests for the default converter of each value type.

mod common;

use common::{assert_conversions, default_options};
use serde_json::json;
use tempora_json::Error;
use tempora_types::{
    CalendarSystem, Duration, Instant, LocalDate, LocalDateTime, LocalTime, Offset, OffsetDate,
    OffsetDateTime, OffsetTime, Period, TimeZone, ZonedDateTime,
};
type Result = std::result::Result<(), Box<dyn std::error::Error>>;

#[test]
fn offset() -> Result {
    let options = default_options();
    assert_conversions(&options, &Offset::from_hours_and_minutes(5, 30)?, json!("+05:30"));
    assert_conversions(&options, &Offset::ZERO, json!("Z"));
    Ok(())
}

#[test]
fn instant() -> Result {
    let options = default_options();
    let value = Instant::from_utc(2012, 1, 2, 3, 4, 5)?;
    assert_conversions(&options, &value, json!("2012-01-02T03:04:05Z"));
    Ok(())
}

#[test]
fn local_date() -> Result {
    let options = default_options();
    assert_conversions(&options, &LocalDate::new(2012, 1, 2)?, json!("2012-01-02"));
    Ok(())
}

#[test]
fn local_date_as_map_key() -> Result {
    let options = default_options();
    let mut object = serde_json::Map::new();
    object.insert(
        options.serialize_key(&LocalDate::new(2012, 12, 21)?)?,
        json!("Mayan Calendar"),
    );
    object.insert(
        options.serialize_key(&LocalDate::new(2012, 12, 22)?)?,
        json!("We Survived"),
    );
    assert_eq!(
        serde_json::to_string(&object)?,
        r#"{"2012-12-21":"Mayan Calendar","2012-12-22":"We Survived"}"#
    );
    let read: LocalDate = options.deserialize_key("2012-12-21")?;
    assert_eq!(read, LocalDate::new(2012, 12, 21)?);
    Ok(())
}

#[test]
fn local_date_non_iso_rejected_on_write() -> Result {
    let options = default_options();
    let date = LocalDate::new(2012, 1, 2)?.with_calendar(CalendarSystem::Julian);
    let got = options.serialize(&date);
    assert!(
        matches!(
            got,
            Err(Error::NonIsoCalendar {
                type_name: "LocalDate",
                calendar: "Julian",
            })
        ),
        "{got:?}"
    );
    Ok(())
}

#[test]
fn local_date_time() -> Result {
    let options = default_options();
    let value = LocalDateTime::new(
        LocalDate::new(2012, 1, 2)?,
        LocalTime::from_hms_nano(3, 4, 5, 123_456_789)?,
    );
    assert_conversions(&options, &value, json!("2012-01-02T03:04:05.123456789"));
    Ok(())
}

#[test]
fn local_date_time_non_iso_rejected_on_write() -> Result {
    let options = default_options();
    let value = LocalDateTime::new(LocalDate::new(2012, 1, 2)?, LocalTime::new(3, 4, 5)?)
        .with_calendar(CalendarSystem::Julian);
    assert!(matches!(
        options.serialize(&value),
        Err(Error::NonIsoCalendar { .. })
    ));
    Ok(())
}

#[test]
fn local_time() -> Result {
    let options = default_options();
    let value = LocalTime::from_hms_nano(1, 2, 3, 4_000_567)?;
    assert_conversions(&options, &value, json!("01:02:03.004000567"));
    Ok(())
}

#[test]
fn roundtrip_period() -> Result {
    let options = default_options();
    let value = Period::from_days(2) + Period::from_hours(3) + Period::from_minutes(90);
    assert_conversions(&options, &value, json!("P2DT3H90M"));
    Ok(())
}

#[test]
fn zoned_date_time_ambiguous_local_times() -> Result {
    let options = default_options();
    let local = LocalDateTime::new(LocalDate::new(2012, 10, 28)?, LocalTime::new(1, 30, 0)?);
    let zone = TimeZone::new("Europe/London");
    let earlier = ZonedDateTime::new(local, Offset::from_hours(1)?, zone.clone());
    let later = ZonedDateTime::new(local, Offset::ZERO, zone);
    assert_conversions(&options, &earlier, json!("2012-10-28T01:30:00+01 Europe/London"));
    assert_conversions(&options, &later, json!("2012-10-28T01:30:00Z Europe/London"));
    Ok(())
}

#[test]
fn zoned_date_time_unknown_zone_fails() -> Result {
    let options = default_options();
    let got = options.deserialize::<ZonedDateTime>(&json!("2012-10-28T01:30:00Z Pluto/Underworld"));
    assert!(matches!(got, Err(Error::Conversion { type_name: "ZonedDateTime", .. })), "{got:?}");
    Ok(())
}

#[test]
fn offset_date_time() -> Result {
    let options = default_options();
    let local = LocalDateTime::new(
        LocalDate::new(2012, 1, 2)?,
        LocalTime::from_hms_nano(3, 4, 5, 123_456_789)?,
    );
    assert_conversions(
        &options,
        &OffsetDateTime::new(local, Offset::from_hours_and_minutes(-1, -30)?),
        json!("2012-01-02T03:04:05.123456789-01:30"),
    );
    // Whole-hour offsets still write minutes, for RFC 3339 consumers.
    assert_conversions(
        &options,
        &OffsetDateTime::new(local, Offset::from_hours(5)?),
        json!("2012-01-02T03:04:05.123456789+05:00"),
    );
    assert_conversions(
        &options,
        &OffsetDateTime::new(local, Offset::ZERO),
        json!("2012-01-02T03:04:05.123456789Z"),
    );
    Ok(())
}

#[test]
fn offset_date_time_non_iso_rejected_on_write() -> Result {
    let options = default_options();
    let local = LocalDateTime::new(LocalDate::new(2012, 1, 2)?, LocalTime::new(3, 4, 5)?)
        .with_calendar(CalendarSystem::Julian);
    let value = OffsetDateTime::new(local, Offset::ZERO);
    assert!(matches!(
        options.serialize(&value),
        Err(Error::NonIsoCalendar { type_name: "OffsetDateTime", .. })
    ));
    Ok(())
}

#[test]
fn zoned_date_time_non_iso_rejected_on_write() -> Result {
    let options = default_options();
    let local = LocalDateTime::new(LocalDate::new(2012, 1, 2)?, LocalTime::new(3, 4, 5)?)
        .with_calendar(CalendarSystem::Julian);
    let value = ZonedDateTime::new(local, Offset::ZERO, TimeZone::new("Europe/London"));
    assert!(matches!(
        options.serialize(&value),
        Err(Error::NonIsoCalendar { type_name: "ZonedDateTime", .. })
    ));
    Ok(())
}

#[test]
fn duration_whole_and_fractional_seconds() -> Result {
    let options = default_options();
    assert_conversions(&options, &Duration::from_hours(48), json!("48:00:00"));
    let base = Duration::from_hours(48) + Duration::from_seconds(3);
    assert_conversions(
        &options,
        &(base + Duration::from_nanoseconds(123_456_789)),
        json!("48:00:03.123456789"),
    );
    assert_conversions(
        &options,
        &(base + Duration::from_milliseconds(123)),
        json!("48:00:03.123"),
    );
    assert_conversions(
        &options,
        &(base + Duration::from_nanoseconds(123_400_000)),
        json!("48:00:03.1234"),
    );
    Ok(())
}

#[test]
fn duration_parses_fractions_with_trailing_zeros() -> Result {
    let options = default_options();
    let parsed: Duration = options.deserialize(&json!("25:10:00.1234000"))?;
    let want =
        Duration::from_hours(25) + Duration::from_minutes(10) + Duration::from_nanoseconds(123_400_000);
    assert_eq!(parsed, want);
    Ok(())
}

#[test]
fn offset_date() -> Result {
    let options = default_options();
    let value = OffsetDate::new(LocalDate::new(2012, 1, 2)?, Offset::from_hours_and_minutes(-1, -30)?);
    assert_conversions(&options, &value, json!("2012-01-02-01:30"));
    Ok(())
}

#[test]
fn offset_time() -> Result {
    let options = default_options();
    let value = OffsetTime::new(
        LocalTime::from_hms_nano(3, 4, 5, 123_456_789)?,
        Offset::from_hours_and_minutes(-1, -30)?,
    );
    assert_conversions(&options, &value, json!("03:04:05.123456789-01:30"));
    Ok(())
}

#[test]
fn time_zone() -> Result {
    let options = default_options();
    assert_conversions(
        &options,
        &TimeZone::new("America/Los_Angeles"),
        json!("America/Los_Angeles"),
    );
    Ok(())
}

#[test]
fn time_zone_not_found_is_preserved_as_cause() -> Result {
    let options = default_options();
    let err = options
        .deserialize::<TimeZone>(&json!("Pacific/Atlantis"))
        .expect_err("unknown zone must fail");
    assert!(matches!(err, Error::Conversion { type_name: "TimeZone", .. }), "{err:?}");
    let cause = std::error::Error::source(&err).expect("cause must be preserved");
    assert!(cause.to_string().contains("Pacific/Atlantis"), "{cause}");
    Ok(())
}

#[test]
fn malformed_text_is_wrapped_per_type() -> Result {
    let options = default_options();
    let err = options
        .deserialize::<LocalDate>(&json!("not a date"))
        .expect_err("malformed text must fail");
    assert_eq!(err.to_string(), "cannot convert value to LocalDate");
    assert!(std::error::Error::source(&err).is_some());
    Ok(())
}
