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
use crate::day_of_week::IsoDayOfWeek;

/// A calendar date with no time-of-day, offset, or zone.
///
/// The components are interpreted in the date's [CalendarSystem]; dates in
/// different calendars never compare equal, even when their components match.
///
/// # Examples
/// ```
/// # use tempora_types::{LocalDate, LocalDateError};
/// let d = LocalDate::new(2012, 1, 2)?;
/// assert_eq!((d.year(), d.month(), d.day()), (2012, 1, 2));
/// # Ok::<(), LocalDateError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate {
    calendar: CalendarSystem,
    date: time::Date,
}

/// Represents failures in creating [LocalDate] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LocalDateError {
    /// A component was out of range, or the day does not exist in the
    /// year/month.
    #[error("date component out of range")]
    OutOfRange(#[source] time::error::ComponentRange),
}

impl LocalDate {
    /// Creates a date in the ISO calendar.
    ///
    /// # Examples
    /// ```
    /// # use tempora_types::{LocalDate, LocalDateError};
    /// assert!(LocalDate::new(2008, 2, 29).is_ok());
    /// assert!(LocalDate::new(2007, 2, 29).is_err());
    /// # Ok::<(), LocalDateError>(())
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, LocalDateError> {
        let month = time::Month::try_from(month).map_err(LocalDateError::OutOfRange)?;
        let date =
            time::Date::from_calendar_date(year, month, day).map_err(LocalDateError::OutOfRange)?;
        Ok(Self {
            calendar: CalendarSystem::Iso,
            date,
        })
    }

    /// Returns the same component values tagged with a different calendar
    /// system.
    pub fn with_calendar(self, calendar: CalendarSystem) -> Self {
        Self { calendar, ..self }
    }

    /// The calendar system this date's components are expressed in.
    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The month component, 1 through 12.
    pub fn month(&self) -> u8 {
        u8::from(self.date.month())
    }

    /// The day-of-month component.
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    /// The ISO day of the week this date falls on.
    pub fn day_of_week(&self) -> IsoDayOfWeek {
        match self.date.weekday() {
            time::Weekday::Monday => IsoDayOfWeek::Monday,
            time::Weekday::Tuesday => IsoDayOfWeek::Tuesday,
            time::Weekday::Wednesday => IsoDayOfWeek::Wednesday,
            time::Weekday::Thursday => IsoDayOfWeek::Thursday,
            time::Weekday::Friday => IsoDayOfWeek::Friday,
            time::Weekday::Saturday => IsoDayOfWeek::Saturday,
            time::Weekday::Sunday => IsoDayOfWeek::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test_case(2012, 0, 1; "zero month")]
    #[test_case(2012, 13, 1; "month too large")]
    #[test_case(2012, 1, 0; "zero day")]
    #[test_case(2012, 4, 31; "day too large for month")]
    #[test_case(2007, 2, 29; "february 29 in a common year")]
    fn rejects_invalid_components(year: i32, month: u8, day: u8) {
        let d = LocalDate::new(year, month, day);
        assert!(matches!(d, Err(LocalDateError::OutOfRange(_))), "{d:?}");
    }

    #[test]
    fn calendar_tag_participates_in_equality() -> Result {
        let iso = LocalDate::new(2012, 1, 2)?;
        let julian = iso.with_calendar(CalendarSystem::Julian);
        assert_eq!(julian.year(), 2012);
        assert_ne!(iso, julian);
        assert_eq!(iso.calendar(), CalendarSystem::Iso);
        assert_eq!(julian.calendar(), CalendarSystem::Julian);
        Ok(())
    }

    #[test]
    fn day_of_week() -> Result {
        // 2012-01-02 was a Monday.
        assert_eq!(LocalDate::new(2012, 1, 2)?.day_of_week(), IsoDayOfWeek::Monday);
        assert_eq!(LocalDate::new(2012, 1, 8)?.day_of_week(), IsoDayOfWeek::Sunday);
        Ok(())
    }
}
