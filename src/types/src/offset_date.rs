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
use crate::date::LocalDate;
use crate::offset::Offset;

/// A calendar date together with a fixed UTC offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OffsetDate {
    date: LocalDate,
    offset: Offset,
}

impl OffsetDate {
    /// Combines a date with an offset.
    pub fn new(date: LocalDate, offset: Offset) -> Self {
        Self { date, offset }
    }

    /// The date component.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// The UTC offset.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The calendar system the date component is expressed in.
    pub fn calendar(&self) -> CalendarSystem {
        self.date.calendar()
    }
}
