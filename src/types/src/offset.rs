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

use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// A fixed offset from UTC, in seconds, between -18:00 and +18:00 inclusive.
///
/// # Examples
/// ```
/// # use tempora_types::{Offset, OffsetError};
/// let o = Offset::from_hours_and_minutes(5, 30)?;
/// assert_eq!(o.seconds(), 19_800);
/// assert_eq!(Offset::ZERO.seconds(), 0);
/// # Ok::<(), OffsetError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset {
    seconds: i32,
}

/// Represents failures in creating [Offset] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum OffsetError {
    /// The offset magnitude exceeds 18 hours.
    #[error("UTC offsets must be between -18:00 and +18:00")]
    OutOfRange,
}

type Error = OffsetError;

impl Offset {
    /// The maximum offset magnitude in seconds (18 hours).
    pub const MAX_SECONDS: i32 = 18 * SECONDS_PER_HOUR as i32;

    /// The zero offset, i.e. UTC itself.
    pub const ZERO: Offset = Offset { seconds: 0 };

    /// Creates an offset from a count of seconds.
    pub fn from_seconds(seconds: i32) -> Result<Self, Error> {
        if !(-Self::MAX_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds })
    }

    /// Creates an offset of a whole number of hours.
    pub fn from_hours(hours: i32) -> Result<Self, Error> {
        Self::from_seconds(hours * SECONDS_PER_HOUR as i32)
    }

    /// Creates an offset from hour and minute components.
    ///
    /// Both components must have the same sign (or be zero); the minute
    /// magnitude must be below 60.
    pub fn from_hours_and_minutes(hours: i32, minutes: i32) -> Result<Self, Error> {
        if minutes.abs() >= 60 || (hours != 0 && minutes != 0 && hours.signum() != minutes.signum())
        {
            return Err(Error::OutOfRange);
        }
        Self::from_seconds(hours * SECONDS_PER_HOUR as i32 + minutes * SECONDS_PER_MINUTE as i32)
    }

    /// The total offset in seconds. Negative west of Greenwich.
    pub fn seconds(&self) -> i32 {
        self.seconds
    }
}
