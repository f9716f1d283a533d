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

use super::fields::{parse_fraction, push_fraction, two_digits};
use super::{ParseError, Pattern};
use crate::local_time::LocalTime;

/// The extended ISO-8601 time pattern, `HH:mm:ss` with up to nine fractional
/// digits as needed.
///
/// # Examples
/// ```
/// # use tempora_types::text::{LocalTimePattern, Pattern};
/// let pattern = LocalTimePattern::extended_iso();
/// let time = pattern.parse("01:02:03.004000567")?;
/// assert_eq!(pattern.format(&time), "01:02:03.004000567");
/// # Ok::<(), tempora_types::text::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTimePattern;

impl LocalTimePattern {
    /// The extended ISO pattern instance.
    pub fn extended_iso() -> Self {
        Self
    }
}

pub(super) fn format_time_into(out: &mut String, value: &LocalTime) {
    out.push_str(&format!(
        "{:02}:{:02}:{:02}",
        value.hour(),
        value.minute(),
        value.second()
    ));
    push_fraction(out, value.nanosecond());
}

pub(super) fn parse_time_body(kind: &'static str, text: &str) -> Result<LocalTime, ParseError> {
    let (hms, fraction) = match text.split_once('.') {
        Some((hms, fraction)) => (hms, Some(fraction)),
        None => (text, None),
    };
    let bytes = hms.as_bytes();
    if hms.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
        return Err(ParseError::mismatch(kind, text, "expected HH:mm:ss"));
    }
    let hour = two_digits(&hms[0..2])
        .ok_or_else(|| ParseError::mismatch(kind, text, "expected a two-digit hour"))?;
    let minute = two_digits(&hms[3..5])
        .ok_or_else(|| ParseError::mismatch(kind, text, "expected two-digit minutes"))?;
    let second = two_digits(&hms[6..8])
        .ok_or_else(|| ParseError::mismatch(kind, text, "expected two-digit seconds"))?;
    let nanos = match fraction {
        Some(fraction) => parse_fraction(kind, fraction)?,
        None => 0,
    };
    LocalTime::from_hms_nano(hour as u8, minute as u8, second as u8, nanos)
        .map_err(|e| ParseError::invalid(kind, text, e))
}

impl Pattern<LocalTime> for LocalTimePattern {
    fn parse(&self, text: &str) -> Result<LocalTime, ParseError> {
        parse_time_body("LocalTime", text)
    }

    fn format(&self, value: &LocalTime) -> String {
        let mut out = String::with_capacity(18);
        format_time_into(&mut out, value);
        out
    }
}
