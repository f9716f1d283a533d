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

/// A local date and time together with a fixed UTC offset.
///
/// Equality compares the local value and the offset; two values describing
/// the same instant through different offsets are not equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OffsetDateTime {
    date_time: LocalDateTime,
    offset: Offset,
}

impl OffsetDateTime {
    /// Combines a local date-time with an offset.
    pub fn new(date_time: LocalDateTime, offset: Offset) -> Self {
        Self { date_time, offset }
    }

    /// The local date-time component.
    pub fn date_time(&self) -> LocalDateTime {
        self.date_time
    }

    /// The UTC offset.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The calendar system the date component is expressed in.
    pub fn calendar(&self) -> CalendarSystem {
        self.date_time.calendar()
    }
}
