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

use super::fields::{parse_digits, parse_fraction, push_fraction, two_digits};
use super::{ParseError, Pattern};
use crate::constants::{
    NANOSECONDS_PER_DAY, NANOSECONDS_PER_HOUR, NANOSECONDS_PER_MINUTE, NANOSECONDS_PER_SECOND,
};
use crate::duration::Duration;

const KIND: &str = "Duration";
const DAY: u128 = NANOSECONDS_PER_DAY as u128;
const HOUR: u128 = NANOSECONDS_PER_HOUR as u128;
const MINUTE: u128 = NANOSECONDS_PER_MINUTE as u128;
const SECOND: u128 = NANOSECONDS_PER_SECOND as u128;

/// Text patterns for [Duration].
///
/// Two forms are supported:
///
/// - [hours_minutes_seconds][DurationPattern::hours_minutes_seconds]:
///   `-H:mm:ss.FFFFFFFFF` with an unbounded hour field, e.g. `48:00:03.123`.
/// - [roundtrip][DurationPattern::roundtrip]: `-D:hh:mm:ss.FFFFFFFFF` with a
///   leading day field, e.g. `2:00:00:03.123`.
///
/// In both forms the fractional seconds are omitted when zero and a single
/// leading `-` covers the whole value.
///
/// # Examples
/// ```
/// # use tempora_types::Duration;
/// # use tempora_types::text::{DurationPattern, Pattern};
/// let d = Duration::from_hours(48) + Duration::from_seconds(3);
/// assert_eq!(DurationPattern::hours_minutes_seconds().format(&d), "48:00:03");
/// assert_eq!(DurationPattern::roundtrip().format(&d), "2:00:00:03");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DurationPattern {
    days_component: bool,
}

impl DurationPattern {
    /// The `-H:mm:ss.FFFFFFFFF` pattern, with unbounded hours.
    pub fn hours_minutes_seconds() -> Self {
        Self {
            days_component: false,
        }
    }

    /// The `-D:hh:mm:ss.FFFFFFFFF` pattern, splitting whole days out of the
    /// hour field.
    pub fn roundtrip() -> Self {
        Self {
            days_component: true,
        }
    }
}

impl Pattern<Duration> for DurationPattern {
    fn parse(&self, text: &str) -> Result<Duration, ParseError> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (clock, fraction) = match body.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (body, None),
        };
        let nanos = match fraction {
            Some(fraction) => parse_fraction(KIND, fraction)? as u128,
            None => 0,
        };
        let fields: Vec<&str> = clock.split(':').collect();
        let mut magnitude = nanos;
        let (minute_field, second_field) = match (self.days_component, fields.as_slice()) {
            (false, [hour_field, minute_field, second_field]) => {
                let hours = parse_digits(hour_field)
                    .ok_or_else(|| ParseError::mismatch(KIND, text, "expected an hour count"))?;
                magnitude += hours as u128 * HOUR;
                (*minute_field, *second_field)
            }
            (true, [day_field, hour_field, minute_field, second_field]) => {
                let days = parse_digits(day_field)
                    .ok_or_else(|| ParseError::mismatch(KIND, text, "expected a day count"))?;
                // Keep the floored day count within i64 after carrying.
                if days >= i64::MAX as u64 {
                    return Err(ParseError::OutOfRange {
                        kind: KIND,
                        component: "days",
                        value: i64::MAX,
                    });
                }
                let hours = two_digits(hour_field)
                    .ok_or_else(|| ParseError::mismatch(KIND, text, "expected two-digit hours"))?;
                if hours >= 24 {
                    return Err(ParseError::OutOfRange {
                        kind: KIND,
                        component: "hours",
                        value: hours as i64,
                    });
                }
                magnitude += days as u128 * DAY + hours as u128 * HOUR;
                (*minute_field, *second_field)
            }
            (false, _) => return Err(ParseError::mismatch(KIND, text, "expected H:mm:ss")),
            (true, _) => return Err(ParseError::mismatch(KIND, text, "expected D:hh:mm:ss")),
        };
        let minutes = two_digits(minute_field)
            .ok_or_else(|| ParseError::mismatch(KIND, text, "expected two-digit minutes"))?;
        if minutes >= 60 {
            return Err(ParseError::OutOfRange {
                kind: KIND,
                component: "minutes",
                value: minutes as i64,
            });
        }
        let seconds = two_digits(second_field)
            .ok_or_else(|| ParseError::mismatch(KIND, text, "expected two-digit seconds"))?;
        if seconds >= 60 {
            return Err(ParseError::OutOfRange {
                kind: KIND,
                component: "seconds",
                value: seconds as i64,
            });
        }
        magnitude += minutes as u128 * MINUTE + seconds as u128 * SECOND;

        let total = magnitude as i128;
        Ok(Duration::from_total_nanoseconds(if negative {
            -total
        } else {
            total
        }))
    }

    fn format(&self, value: &Duration) -> String {
        let total = value.total_nanoseconds();
        let magnitude = total.unsigned_abs();
        let mut out = String::with_capacity(20);
        if total < 0 {
            out.push('-');
        }
        if self.days_component {
            out.push_str(&format!(
                "{}:{:02}",
                magnitude / DAY,
                magnitude / HOUR % 24
            ));
        } else {
            out.push_str(&format!("{}", magnitude / HOUR));
        }
        out.push_str(&format!(
            ":{:02}:{:02}",
            magnitude / MINUTE % 60,
            magnitude / SECOND % 60
        ));
        push_fraction(&mut out, (magnitude % SECOND) as u32);
        out
    }
}
