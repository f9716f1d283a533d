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

use crate::date::LocalDate;

/// An inclusive interval between two calendar dates.
///
/// Both endpoints are mandatory and must use the same calendar system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: LocalDate,
    end: LocalDate,
}

/// Represents failures in creating [DateInterval] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DateIntervalError {
    /// The end date is earlier than the start date.
    #[error("the end of a date interval must not be earlier than its start")]
    EndBeforeStart,
    /// The endpoints use different calendar systems.
    #[error("both ends of a date interval must use the same calendar system")]
    CalendarMismatch,
}

impl DateInterval {
    /// Creates an interval covering `start` through `end`, inclusive.
    pub fn new(start: LocalDate, end: LocalDate) -> Result<Self, DateIntervalError> {
        if start.calendar() != end.calendar() {
            return Err(DateIntervalError::CalendarMismatch);
        }
        if end < start {
            return Err(DateIntervalError::EndBeforeStart);
        }
        Ok(Self { start, end })
    }

    /// The first date in the interval.
    pub fn start(&self) -> LocalDate {
        self.start
    }

    /// The last date in the interval.
    pub fn end(&self) -> LocalDate {
        self.end
    }
}
