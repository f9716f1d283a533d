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

use crate::calendar::CalendarSystem;
use crate::local_date_time::LocalDateTime;
use crate::offset::Offset;
use crate::zone::TimeZone;

/// A local date and time in a specific time zone, with the UTC offset made
/// explicit.
///
/// The explicit offset is what disambiguates local times that are ambiguous
/// (repeated when clocks fall back) or skipped (when clocks spring forward):
/// the same local date-time in the same zone with two different offsets
/// denotes two different moments, and the two values are not equal.
///
/// Whether a given offset is actually valid for the zone at that local time
/// is a time-zone-database question and is not checked here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    date_time: LocalDateTime,
    offset: Offset,
    zone: TimeZone,
}

impl ZonedDateTime {
    /// Combines a local date-time, an offset, and a zone.
    pub fn new(date_time: LocalDateTime, offset: Offset, zone: TimeZone) -> Self {
        Self {
            date_time,
            offset,
            zone,
        }
    }

    /// The local date-time component.
    pub fn date_time(&self) -> LocalDateTime {
        self.date_time
    }

    /// The UTC offset in effect.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The time zone.
    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    /// The calendar system the date component is expressed in.
    pub fn calendar(&self) -> CalendarSystem {
        self.date_time.calendar()
    }
}
