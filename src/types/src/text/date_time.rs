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
use super::time::{format_time_into, parse_time_body};
use super::{ParseError, Pattern};
use crate::local_date_time::LocalDateTime;

/// The extended ISO-8601 date-time pattern, `uuuu-MM-ddTHH:mm:ss` with
/// fractional seconds as needed and no offset designator.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalDateTimePattern;

impl LocalDateTimePattern {
    /// The extended ISO pattern instance.
    pub fn extended_iso() -> Self {
        Self
    }
}

pub(super) fn format_date_time_into(out: &mut String, value: &LocalDateTime) {
    format_date_into(out, &value.date());
    out.push('T');
    format_time_into(out, &value.time());
}

pub(super) fn parse_date_time_body(
    kind: &'static str,
    text: &str,
) -> Result<LocalDateTime, ParseError> {
    let (date, time) = text
        .split_once('T')
        .ok_or_else(|| ParseError::mismatch(kind, text, "expected a 'T' date/time separator"))?;
    Ok(LocalDateTime::new(
        parse_date_body(kind, date)?,
        parse_time_body(kind, time)?,
    ))
}

impl Pattern<LocalDateTime> for LocalDateTimePattern {
    fn parse(&self, text: &str) -> Result<LocalDateTime, ParseError> {
        parse_date_time_body("LocalDateTime", text)
    }

    fn format(&self, value: &LocalDateTime) -> String {
        let mut out = String::with_capacity(29);
        format_date_time_into(&mut out, value);
        out
    }
}
