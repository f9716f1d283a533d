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

/// A month and day without a year, e.g. an anniversary or a recurring
/// deadline.
///
/// February 29 is a valid annual date even though it only occurs in leap
/// years.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnnualDate {
    month: u8,
    day: u8,
}

/// Represents failures in creating [AnnualDate] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnnualDateError {
    /// The month was outside 1..=12, or the day does not occur in the month
    /// in any year.
    #[error("annual date components out of range: month {month}, day {day}")]
    OutOfRange {
        /// The rejected month component.
        month: u8,
        /// The rejected day component.
        day: u8,
    },
}

// Maximum day per month in any year, so February allows 29.
const MAX_DAY: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl AnnualDate {
    /// Creates an annual date from month and day components.
    ///
    /// # Examples
    /// ```
    /// # use tempora_types::AnnualDate;
    /// assert!(AnnualDate::new(2, 29).is_ok());
    /// assert!(AnnualDate::new(2, 30).is_err());
    /// ```
    pub fn new(month: u8, day: u8) -> Result<Self, AnnualDateError> {
        if !(1..=12).contains(&month) || day < 1 || day > MAX_DAY[month as usize - 1] {
            return Err(AnnualDateError::OutOfRange { month, day });
        }
        Ok(Self { month, day })
    }

    /// The month component, 1 through 12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day component.
    pub fn day(&self) -> u8 {
        self.day
    }
}
