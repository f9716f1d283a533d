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

use super::{ParseError, Pattern};
use crate::period::Period;

const KIND: &str = "Period";

/// The round-trip period pattern.
///
/// Formats as `P` followed by each non-zero component with its unit letter:
/// `Y`, `M`, `W`, `D` for the date components, then `T` and `H`, `M`, `S`,
/// `s` (milliseconds), `n` (nanoseconds) for the time components. Components
/// are never normalized into each other, so every period round-trips
/// exactly. A zero period formats as `"P"`.
///
/// # Examples
/// ```
/// # use tempora_types::Period;
/// # use tempora_types::text::{PeriodPattern, Pattern};
/// let p = Period::from_days(2) + Period::from_hours(3) + Period::from_minutes(90);
/// assert_eq!(PeriodPattern::roundtrip().format(&p), "P2DT3H90M");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PeriodPattern;

impl PeriodPattern {
    /// The round-trip pattern instance.
    pub fn roundtrip() -> Self {
        Self
    }
}

#[derive(Default)]
struct Components {
    years: Option<i64>,
    months: Option<i64>,
    weeks: Option<i64>,
    days: Option<i64>,
    hours: Option<i64>,
    minutes: Option<i64>,
    seconds: Option<i64>,
    milliseconds: Option<i64>,
    nanoseconds: Option<i64>,
}

fn assign(slot: &mut Option<i64>, value: i64, text: &str) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::mismatch(KIND, text, "repeated component"));
    }
    *slot = Some(value);
    Ok(())
}

impl Pattern<Period> for PeriodPattern {
    fn parse(&self, text: &str) -> Result<Period, ParseError> {
        let body = text
            .strip_prefix('P')
            .ok_or_else(|| ParseError::mismatch(KIND, text, "expected a leading 'P'"))?;
        let mut parsed = Components::default();
        let bytes = body.as_bytes();
        let mut i = 0;
        let mut in_time = false;
        while i < bytes.len() {
            if bytes[i] == b'T' {
                if in_time {
                    return Err(ParseError::mismatch(KIND, text, "repeated 'T' separator"));
                }
                in_time = true;
                i += 1;
                continue;
            }
            let negative = bytes[i] == b'-';
            if negative {
                i += 1;
            }
            let digits_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i == digits_start {
                return Err(ParseError::mismatch(KIND, text, "expected a component value"));
            }
            let magnitude: i64 = body[digits_start..i].parse().map_err(|_| {
                ParseError::OutOfRange {
                    kind: KIND,
                    component: "component value",
                    value: i64::MAX,
                }
            })?;
            let value = if negative { -magnitude } else { magnitude };
            let unit = *bytes.get(i).ok_or_else(|| {
                ParseError::mismatch(KIND, text, "expected a unit letter after the value")
            })?;
            i += 1;
            match (in_time, unit) {
                (false, b'Y') => assign(&mut parsed.years, value, text)?,
                (false, b'M') => assign(&mut parsed.months, value, text)?,
                (false, b'W') => assign(&mut parsed.weeks, value, text)?,
                (false, b'D') => assign(&mut parsed.days, value, text)?,
                (true, b'H') => assign(&mut parsed.hours, value, text)?,
                (true, b'M') => assign(&mut parsed.minutes, value, text)?,
                (true, b'S') => assign(&mut parsed.seconds, value, text)?,
                (true, b's') => assign(&mut parsed.milliseconds, value, text)?,
                (true, b'n') => assign(&mut parsed.nanoseconds, value, text)?,
                _ => return Err(ParseError::mismatch(KIND, text, "unexpected unit letter")),
            }
        }
        Ok(Period::from_years(parsed.years.unwrap_or(0))
            + Period::from_months(parsed.months.unwrap_or(0))
            + Period::from_weeks(parsed.weeks.unwrap_or(0))
            + Period::from_days(parsed.days.unwrap_or(0))
            + Period::from_hours(parsed.hours.unwrap_or(0))
            + Period::from_minutes(parsed.minutes.unwrap_or(0))
            + Period::from_seconds(parsed.seconds.unwrap_or(0))
            + Period::from_milliseconds(parsed.milliseconds.unwrap_or(0))
            + Period::from_nanoseconds(parsed.nanoseconds.unwrap_or(0)))
    }

    fn format(&self, value: &Period) -> String {
        let mut out = String::from("P");
        let date_units = [
            (value.years(), 'Y'),
            (value.months(), 'M'),
            (value.weeks(), 'W'),
            (value.days(), 'D'),
        ];
        for (amount, unit) in date_units {
            if amount != 0 {
                out.push_str(&format!("{amount}{unit}"));
            }
        }
        let time_units = [
            (value.hours(), 'H'),
            (value.minutes(), 'M'),
            (value.seconds(), 'S'),
            (value.milliseconds(), 's'),
            (value.nanoseconds(), 'n'),
        ];
        if time_units.iter().any(|(amount, _)| *amount != 0) {
            out.push('T');
            for (amount, unit) in time_units {
                if amount != 0 {
                    out.push_str(&format!("{amount}{unit}"));
                }
            }
        }
        out
    }
}
