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

use std::sync::Arc;

use super::date_time::{format_date_time_into, parse_date_time_body};
use super::fields::{find_offset_start, parse_offset, push_offset};
use super::{ParseError, Pattern};
use crate::zone::ZoneProvider;
use crate::zoned_date_time::ZonedDateTime;

const KIND: &str = "ZonedDateTime";

/// The zoned date-time pattern: the local date-time, the general offset, a
/// space, and the zone id, e.g. `2012-10-28T01:30:00+01 Europe/London`.
///
/// Parsing resolves the zone id through the provider supplied at
/// construction; an unrecognized id is a parse failure. The explicit offset
/// is kept as written, which is what disambiguates local times repeated or
/// skipped around zone transitions.
#[derive(Clone)]
pub struct ZonedDateTimePattern {
    provider: Arc<dyn ZoneProvider>,
}

impl ZonedDateTimePattern {
    /// Creates the pattern with the provider used to resolve zone ids.
    pub fn with_provider(provider: Arc<dyn ZoneProvider>) -> Self {
        Self { provider }
    }
}

impl std::fmt::Debug for ZonedDateTimePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZonedDateTimePattern").finish_non_exhaustive()
    }
}

impl Pattern<ZonedDateTime> for ZonedDateTimePattern {
    fn parse(&self, text: &str) -> Result<ZonedDateTime, ParseError> {
        let (moment, zone_id) = text
            .rsplit_once(' ')
            .ok_or_else(|| ParseError::mismatch(KIND, text, "expected '<date-time><offset> <zone>'"))?;
        let zone = self.provider.zone(zone_id)?;
        let separator = moment
            .find('T')
            .ok_or_else(|| ParseError::mismatch(KIND, text, "expected a 'T' date/time separator"))?;
        let offset_start = find_offset_start(moment, separator)
            .ok_or_else(|| ParseError::mismatch(KIND, text, "expected a UTC offset"))?;
        let date_time = parse_date_time_body(KIND, &moment[..offset_start])?;
        let offset = parse_offset(KIND, &moment[offset_start..])?;
        Ok(ZonedDateTime::new(date_time, offset, zone))
    }

    fn format(&self, value: &ZonedDateTime) -> String {
        let mut out = String::with_capacity(50);
        format_date_time_into(&mut out, &value.date_time());
        push_offset(&mut out, &value.offset(), false);
        out.push(' ');
        out.push_str(value.zone().id());
        out
    }
}
