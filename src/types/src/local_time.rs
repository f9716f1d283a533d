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

/// A time of day with nanosecond resolution, with no date, offset, or zone.
///
/// Valid values run from `00:00:00.000000000` to `23:59:59.999999999`; there
/// is no representation for a leap second or for the end-of-day sentinel
/// `24:00:00`.
///
/// # Examples
/// ```
/// # use tempora_types::{LocalTime, LocalTimeError};
/// let t = LocalTime::from_hms_nano(1, 2, 3, 4_000_567)?;
/// assert_eq!(t.hour(), 1);
/// assert_eq!(t.nanosecond(), 4_000_567);
/// # Ok::<(), LocalTimeError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    time: time::Time,
}

/// Represents failures in creating [LocalTime] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LocalTimeError {
    /// A component was out of range.
    #[error("time-of-day component out of range")]
    OutOfRange(#[source] time::error::ComponentRange),
}

impl LocalTime {
    /// The start of the day, `00:00:00`.
    pub const MIDNIGHT: LocalTime = LocalTime {
        time: time::Time::MIDNIGHT,
    };

    /// Creates a time of day from hour, minute, and second components.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, LocalTimeError> {
        let time =
            time::Time::from_hms(hour, minute, second).map_err(LocalTimeError::OutOfRange)?;
        Ok(Self { time })
    }

    /// Creates a time of day from hour, minute, second, and nanosecond
    /// components.
    pub fn from_hms_nano(
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Result<Self, LocalTimeError> {
        let time = time::Time::from_hms_nano(hour, minute, second, nanosecond)
            .map_err(LocalTimeError::OutOfRange)?;
        Ok(Self { time })
    }

    /// The hour component, 0 through 23.
    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    /// The minute component, 0 through 59.
    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    /// The second component, 0 through 59.
    pub fn second(&self) -> u8 {
        self.time.second()
    }

    /// The sub-second component in nanoseconds, 0 through 999,999,999.
    pub fn nanosecond(&self) -> u32 {
        self.time.nanosecond()
    }
}
