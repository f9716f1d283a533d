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

use super::fields::fixed_digits;
use super::{ParseError, Pattern};
use crate::date::LocalDate;

/// The ISO-8601 date pattern, `uuuu-MM-dd`.
///
/// # Examples
/// ```
/// # use tempora_types::text::{LocalDatePattern, Pattern};
/// let pattern = LocalDatePattern::iso();
/// let date = pattern.parse("2012-01-02")?;
/// assert_eq!(pattern.format(&date), "2012-01-02");
/// # Ok::<(), tempora_types::text::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalDatePattern;

impl LocalDatePattern {
    /// The ISO pattern instance.
    pub fn iso() -> Self {
        Self
    }
}

pub(super) fn format_date_into(out: &mut String, value: &LocalDate) {
    let year = value.year();
    if year < 0 {
        out.push('-');
    }
    out.push_str(&format!(
        "{:04}-{:02}-{:02}",
        year.abs(),
        value.month(),
        value.day()
    ));
}

pub(super) fn parse_date_body(kind: &'static str, text: &str) -> Result<LocalDate, ParseError> {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text),
    };
    let bytes = body.as_bytes();
    if body.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ParseError::mismatch(kind, text, "expected uuuu-MM-dd"));
    }
    let year = fixed_digits(&body[0..4], 4)
        .ok_or_else(|| ParseError::mismatch(kind, text, "expected a four-digit year"))?;
    let month = fixed_digits(&body[5..7], 2)
        .ok_or_else(|| ParseError::mismatch(kind, text, "expected a two-digit month"))?;
    let day = fixed_digits(&body[8..10], 2)
        .ok_or_else(|| ParseError::mismatch(kind, text, "expected a two-digit day"))?;
    LocalDate::new(sign * year as i32, month as u8, day as u8)
        .map_err(|e| ParseError::invalid(kind, text, e))
}

impl Pattern<LocalDate> for LocalDatePattern {
    fn parse(&self, text: &str) -> Result<LocalDate, ParseError> {
        parse_date_body("LocalDate", text)
    }

    fn format(&self, value: &LocalDate) -> String {
        let mut out = String::with_capacity(10);
        format_date_into(&mut out, value);
        out
    }
}
