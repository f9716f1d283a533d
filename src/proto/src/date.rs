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

use tempora_types::{CalendarSystem, LocalDate};

/// The well-known protobuf calendar date.
///
/// Following the wire contract, any component may be zero to mean
/// "unspecified" (a year-less anniversary, a day-less credit card expiry),
/// so the struct itself is looser than [LocalDate]. Converting to a
/// [LocalDate] requires a fully specified date in the ISO calendar.
///
/// # Examples
/// ```
/// # use tempora_proto::{Date, DateError};
/// # use tempora_types::LocalDate;
/// let date = Date::new(2008, 2, 29)?;
/// assert_eq!(LocalDate::try_from(date)?, LocalDate::new(2008, 2, 29)?);
///
/// // A month and day with no year is a valid Date...
/// let anniversary = Date::new(0, 2, 29)?;
/// // ...but not a valid LocalDate.
/// assert!(matches!(
///     LocalDate::try_from(anniversary),
///     Err(DateError::NotFullySpecified)
/// ));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Date {
    /// Year of the date, 1 through 9999, or 0 for a date without a year.
    year: i32,
    /// Month of the year, 1 through 12, or 0 for a year without month and
    /// day.
    month: i32,
    /// Day of the month, 1 through 31, or 0 for a date without a day.
    day: i32,
}

/// Represents failures in creating or converting [Date] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DateError {
    /// A component was outside its documented range.
    #[error("date {0} out of range")]
    OutOfRange(&'static str),

    /// A zero component where the conversion needs a fully specified date.
    #[error("date messages must be fully specified (no zero components) to convert to a calendar date")]
    NotFullySpecified,

    /// The source date uses a calendar other than ISO.
    #[error("only ISO-calendar dates can be converted; actual calendar: {0}")]
    NonIsoCalendar(&'static str),
}

type Error = DateError;

fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            if leap { 29 } else { 28 }
        }
        _ => 31,
    }
}

impl Date {
    /// Creates a [Date], validating each component's documented range. Zero
    /// components are allowed; day/month consistency is only checked when
    /// converting to [LocalDate].
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        if !(0..=9999).contains(&year) {
            return Err(Error::OutOfRange("year"));
        }
        if !(0..=12).contains(&month) {
            return Err(Error::OutOfRange("month"));
        }
        if !(0..=31).contains(&day) {
            return Err(Error::OutOfRange("day"));
        }
        Ok(Self { year, month, day })
    }

    /// The year component, 0 when unspecified.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component, 0 when unspecified.
    pub fn month(&self) -> i32 {
        self.month
    }

    /// The day component, 0 when unspecified.
    pub fn day(&self) -> i32 {
        self.day
    }
}

/// Converts a fully specified [Date] to a [LocalDate] in the ISO calendar.
///
/// Zero components are rejected as "not fully specified", a distinct failure
/// from an ordinary range error; the day is checked against the actual
/// length of the month, leap years included.
impl TryFrom<Date> for LocalDate {
    type Error = DateError;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        if value.year == 0 || value.month == 0 || value.day == 0 {
            return Err(Error::NotFullySpecified);
        }
        if !(1..=9999).contains(&value.year) {
            return Err(Error::OutOfRange("year"));
        }
        if !(1..=12).contains(&value.month) {
            return Err(Error::OutOfRange("month"));
        }
        if value.day > days_in_month(value.year, value.month) {
            return Err(Error::OutOfRange("day"));
        }
        LocalDate::new(value.year, value.month as u8, value.day as u8)
            .map_err(|_| Error::OutOfRange("day"))
    }
}

/// Converts a [LocalDate], requiring the ISO calendar and a year no earlier
/// than 1.
impl TryFrom<LocalDate> for Date {
    type Error = DateError;

    fn try_from(value: LocalDate) -> Result<Self, Self::Error> {
        if value.calendar() != CalendarSystem::Iso {
            return Err(Error::NonIsoCalendar(value.calendar().id()));
        }
        if value.year() < 1 {
            return Err(Error::OutOfRange("year"));
        }
        Self::new(value.year(), value.month() as i32, value.day() as i32)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            #[serde(default)]
            year: i32,
            #[serde(default)]
            month: i32,
            #[serde(default)]
            day: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Date::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}
