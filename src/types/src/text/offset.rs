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

use super::date::{format_date_into, parse_date_body};
use super::date_time::{format_date_time_into, parse_date_time_body};
use super::fields::{find_offset_start, parse_offset, push_offset};
use super::time::{format_time_into, parse_time_body};
use super::{ParseError, Pattern};
use crate::offset::Offset;
use crate::offset_date::OffsetDate;
use crate::offset_date_time::OffsetDateTime;
use crate::offset_time::OffsetTime;

/// The general offset pattern: `Z` for zero, otherwise the shortest of
/// `±HH`, `±HH:mm`, and `±HH:mm:ss` that loses nothing.
///
/// # Examples
/// ```
/// # use tempora_types::Offset;
/// # use tempora_types::text::{OffsetPattern, Pattern};
/// let pattern = OffsetPattern::general();
/// assert_eq!(pattern.format(&Offset::from_hours_and_minutes(5, 30).unwrap()), "+05:30");
/// assert_eq!(pattern.format(&Offset::ZERO), "Z");
/// assert_eq!(pattern.format(&Offset::from_hours(1).unwrap()), "+01");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct OffsetPattern;

impl OffsetPattern {
    /// The general pattern instance.
    pub fn general() -> Self {
        Self
    }
}

impl Pattern<Offset> for OffsetPattern {
    fn parse(&self, text: &str) -> Result<Offset, ParseError> {
        parse_offset("Offset", text)
    }

    fn format(&self, value: &Offset) -> String {
        let mut out = String::with_capacity(9);
        push_offset(&mut out, value, false);
        out
    }
}

/// The RFC 3339 offset date-time pattern: local date-time followed by `Z` or
/// `±HH:mm` (minutes always written, so downstream RFC 3339 consumers can
/// parse the result).
#[derive(Clone, Copy, Debug, Default)]
pub struct OffsetDateTimePattern;

impl OffsetDateTimePattern {
    /// The RFC 3339 pattern instance.
    pub fn rfc3339() -> Self {
        Self
    }
}

impl Pattern<OffsetDateTime> for OffsetDateTimePattern {
    fn parse(&self, text: &str) -> Result<OffsetDateTime, ParseError> {
        const KIND: &str = "OffsetDateTime";
        let separator = text
            .find('T')
            .ok_or_else(|| ParseError::mismatch(KIND, text, "expected a 'T' date/time separator"))?;
        let offset_start = find_offset_start(text, separator)
            .ok_or_else(|| ParseError::mismatch(KIND, text, "expected a UTC offset"))?;
        let date_time = parse_date_time_body(KIND, &text[..offset_start])?;
        let offset = parse_offset(KIND, &text[offset_start..])?;
        Ok(OffsetDateTime::new(date_time, offset))
    }

    fn format(&self, value: &OffsetDateTime) -> String {
        let mut out = String::with_capacity(35);
        format_date_time_into(&mut out, &value.date_time());
        push_offset(&mut out, &value.offset(), true);
        out
    }
}

/// The general ISO offset date pattern: `uuuu-MM-dd` followed by a general
/// offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct OffsetDatePattern;

impl OffsetDatePattern {
    /// The general ISO pattern instance.
    pub fn general_iso() -> Self {
        Self
    }
}

impl Pattern<OffsetDate> for OffsetDatePattern {
    fn parse(&self, text: &str) -> Result<OffsetDate, ParseError> {
        const KIND: &str = "OffsetDate";
        // The date body has fixed width, plus a leading sign for negative
        // years.
        let date_len = if text.starts_with('-') { 11 } else { 10 };
        if text.len() <= date_len || !text.is_char_boundary(date_len) {
            return Err(ParseError::mismatch(
                KIND,
                text,
                "expected uuuu-MM-dd followed by a UTC offset",
            ));
        }
        let date = parse_date_body(KIND, &text[..date_len])?;
        let offset = parse_offset(KIND, &text[date_len..])?;
        Ok(OffsetDate::new(date, offset))
    }

    fn format(&self, value: &OffsetDate) -> String {
        let mut out = String::with_capacity(19);
        format_date_into(&mut out, &value.date());
        push_offset(&mut out, &value.offset(), false);
        out
    }
}

/// The extended ISO offset time pattern: `HH:mm:ss` with fractional seconds
/// as needed, followed by a general offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct OffsetTimePattern;

impl OffsetTimePattern {
    /// The extended ISO pattern instance.
    pub fn extended_iso() -> Self {
        Self
    }
}

impl Pattern<OffsetTime> for OffsetTimePattern {
    fn parse(&self, text: &str) -> Result<OffsetTime, ParseError> {
        const KIND: &str = "OffsetTime";
        let offset_start = find_offset_start(text, 0)
            .ok_or_else(|| ParseError::mismatch(KIND, text, "expected a UTC offset"))?;
        let time = parse_time_body(KIND, &text[..offset_start])?;
        let offset = parse_offset(KIND, &text[offset_start..])?;
        Ok(OffsetTime::new(time, offset))
    }

    fn format(&self, value: &OffsetTime) -> String {
        let mut out = String::with_capacity(27);
        format_time_into(&mut out, &value.time());
        push_offset(&mut out, &value.offset(), false);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LocalDate, LocalDateTime, LocalTime};
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test_case("Z", 0)]
    #[test_case("+05:30", 5 * 3600 + 30 * 60)]
    #[test_case("-01:30", -(3600 + 30 * 60))]
    #[test_case("+05", 5 * 3600)]
    #[test_case("+05:30:45", 5 * 3600 + 30 * 60 + 45)]
    fn offset_round_trip(text: &str, seconds: i32) -> Result {
        let pattern = OffsetPattern::general();
        let offset = pattern.parse(text)?;
        assert_eq!(offset.seconds(), seconds);
        assert_eq!(pattern.format(&offset), text);
        Ok(())
    }

    #[test]
    fn offset_parse_accepts_lowercase_z() -> Result {
        assert_eq!(OffsetPattern::general().parse("z")?, Offset::ZERO);
        Ok(())
    }

    #[test_case("05:30"; "missing sign")]
    #[test_case("+5"; "unpadded hour")]
    #[test_case("+05:3"; "unpadded minutes")]
    #[test_case(""; "empty")]
    fn offset_rejects_malformed(text: &str) {
        assert!(OffsetPattern::general().parse(text).is_err());
    }

    #[test]
    fn offset_rejects_out_of_range() {
        let got = OffsetPattern::general().parse("+19:00");
        assert!(matches!(got, Err(ParseError::OutOfRange { .. })), "{got:?}");
        let got = OffsetPattern::general().parse("+05:60");
        assert!(matches!(got, Err(ParseError::OutOfRange { .. })), "{got:?}");
    }

    fn sample_date_time() -> LocalDateTime {
        LocalDateTime::new(
            LocalDate::new(2012, 1, 2).unwrap(),
            LocalTime::from_hms_nano(3, 4, 5, 123_456_789).unwrap(),
        )
    }

    #[test]
    fn offset_date_time_writes_minutes_for_whole_hours() -> Result {
        let pattern = OffsetDateTimePattern::rfc3339();
        let value = OffsetDateTime::new(sample_date_time(), Offset::from_hours(5)?);
        assert_eq!(pattern.format(&value), "2012-01-02T03:04:05.123456789+05:00");
        assert_eq!(pattern.parse("2012-01-02T03:04:05.123456789+05:00")?, value);
        Ok(())
    }

    #[test]
    fn offset_date_time_zero_offset_is_z() -> Result {
        let pattern = OffsetDateTimePattern::rfc3339();
        let value = OffsetDateTime::new(sample_date_time(), Offset::ZERO);
        assert_eq!(pattern.format(&value), "2012-01-02T03:04:05.123456789Z");
        assert_eq!(pattern.parse("2012-01-02T03:04:05.123456789Z")?, value);
        Ok(())
    }

    #[test]
    fn offset_date_time_negative_offset() -> Result {
        let pattern = OffsetDateTimePattern::rfc3339();
        let value = OffsetDateTime::new(sample_date_time(), Offset::from_hours_and_minutes(-1, -30)?);
        assert_eq!(pattern.format(&value), "2012-01-02T03:04:05.123456789-01:30");
        assert_eq!(pattern.parse("2012-01-02T03:04:05.123456789-01:30")?, value);
        Ok(())
    }

    #[test]
    fn offset_date_round_trip() -> Result {
        let pattern = OffsetDatePattern::general_iso();
        let value = OffsetDate::new(
            LocalDate::new(2012, 1, 2)?,
            Offset::from_hours_and_minutes(-1, -30)?,
        );
        assert_eq!(pattern.format(&value), "2012-01-02-01:30");
        assert_eq!(pattern.parse("2012-01-02-01:30")?, value);
        Ok(())
    }

    #[test]
    fn offset_time_round_trip() -> Result {
        let pattern = OffsetTimePattern::extended_iso();
        let value = OffsetTime::new(
            LocalTime::from_hms_nano(3, 4, 5, 123_456_789)?,
            Offset::from_hours_and_minutes(-1, -30)?,
        );
        assert_eq!(pattern.format(&value), "03:04:05.123456789-01:30");
        assert_eq!(pattern.parse("03:04:05.123456789-01:30")?, value);
        Ok(())
    }

    #[test]
    fn offset_forms_without_offset_are_rejected() {
        assert!(OffsetDateTimePattern::rfc3339().parse("2012-01-02T03:04:05").is_err());
        assert!(OffsetDatePattern::general_iso().parse("2012-01-02").is_err());
        assert!(OffsetTimePattern::extended_iso().parse("03:04:05").is_err());
    }
}
