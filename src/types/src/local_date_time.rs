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
use crate::local_time::LocalTime;

/// A calendar date combined with a time of day, with no offset or zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {
    /// Combines a date and a time of day.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// The date component.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// The time-of-day component.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// The calendar system the date component is expressed in.
    pub fn calendar(&self) -> CalendarSystem {
        self.date.calendar()
    }

    /// Returns the same value with the date tagged with a different calendar
    /// system.
    pub fn with_calendar(self, calendar: CalendarSystem) -> Self {
        Self {
            date: self.date.with_calendar(calendar),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn components() -> Result {
        let dt = LocalDateTime::new(
            LocalDate::new(2012, 1, 2)?,
            LocalTime::from_hms_nano(3, 4, 5, 123_456_789)?,
        );
        assert_eq!(dt.date().year(), 2012);
        assert_eq!(dt.time().nanosecond(), 123_456_789);
        assert_eq!(dt.calendar(), CalendarSystem::Iso);
        Ok(())
    }

    #[test]
    fn calendar_tag() -> Result {
        let dt = LocalDateTime::new(LocalDate::new(2012, 1, 2)?, LocalTime::MIDNIGHT);
        let julian = dt.with_calendar(CalendarSystem::Julian);
        assert_ne!(dt, julian);
        assert_eq!(julian.calendar(), CalendarSystem::Julian);
        Ok(())
    }
}
