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

use tempora_types::LocalTime;

/// The well-known protobuf time of day.
///
/// The wire contract admits two values an ordinary time of day cannot
/// represent: `24:00:00` as an end-of-day marker, and a seconds value of 60
/// for leap seconds. Both are constructible here, and both are explicitly
/// rejected when converting to [LocalTime] — rejection, not clamping, so no
/// caller silently loses the distinction.
///
/// # Examples
/// ```
/// # use tempora_proto::{TimeOfDay, TimeOfDayError};
/// # use tempora_types::LocalTime;
/// let end_of_day = TimeOfDay::new(24, 0, 0, 0)?;
/// assert!(matches!(
///     LocalTime::try_from(end_of_day),
///     Err(TimeOfDayError::EndOfDayUnsupported)
/// ));
/// # Ok::<(), TimeOfDayError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TimeOfDay {
    /// Hours, 0 through 23, or 24 for end-of-day with zero minutes, seconds,
    /// and nanos.
    hours: i32,
    /// Minutes, 0 through 59.
    minutes: i32,
    /// Seconds, 0 through 59, or 60 for a leap second.
    seconds: i32,
    /// Sub-second nanoseconds, 0 through 999,999,999.
    nanos: i32,
}

/// Represents failures in creating or converting [TimeOfDay] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimeOfDayError {
    /// A component was outside its documented range.
    #[error("time-of-day {0} out of range")]
    OutOfRange(&'static str),

    /// The end-of-day marker `24:00:00` has no [LocalTime] representation.
    #[error("the end-of-day value 24:00:00 has no time-of-day representation")]
    EndOfDayUnsupported,

    /// A leap second has no [LocalTime] representation.
    #[error("leap-second values (seconds = 60) have no time-of-day representation")]
    LeapSecondUnsupported,
}

type Error = TimeOfDayError;

impl TimeOfDay {
    /// Creates a [TimeOfDay], validating each component's documented range,
    /// including the end-of-day and leap-second forms.
    pub fn new(hours: i32, minutes: i32, seconds: i32, nanos: i32) -> Result<Self, Error> {
        if hours == 24 {
            if minutes != 0 || seconds != 0 || nanos != 0 {
                return Err(Error::OutOfRange("hours"));
            }
        } else if !(0..=23).contains(&hours) {
            return Err(Error::OutOfRange("hours"));
        }
        if !(0..=59).contains(&minutes) {
            return Err(Error::OutOfRange("minutes"));
        }
        if !(0..=60).contains(&seconds) {
            return Err(Error::OutOfRange("seconds"));
        }
        if !(0..=999_999_999).contains(&nanos) {
            return Err(Error::OutOfRange("nanos"));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
            nanos,
        })
    }

    /// The hours component.
    pub fn hours(&self) -> i32 {
        self.hours
    }

    /// The minutes component.
    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    /// The seconds component.
    pub fn seconds(&self) -> i32 {
        self.seconds
    }

    /// The sub-second nanoseconds component.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

/// Converts to a [LocalTime], rejecting the end-of-day and leap-second
/// sentinels the plain time-of-day cannot express.
impl TryFrom<TimeOfDay> for LocalTime {
    type Error = TimeOfDayError;

    fn try_from(value: TimeOfDay) -> Result<Self, Self::Error> {
        if value.hours == 24 {
            return Err(Error::EndOfDayUnsupported);
        }
        if value.seconds == 60 {
            return Err(Error::LeapSecondUnsupported);
        }
        LocalTime::from_hms_nano(
            value.hours as u8,
            value.minutes as u8,
            value.seconds as u8,
            value.nanos as u32,
        )
        .map_err(|_| Error::OutOfRange("time"))
    }
}

/// Converts a [LocalTime]. Every time of day is representable, so this
/// direction cannot fail.
impl From<LocalTime> for TimeOfDay {
    fn from(value: LocalTime) -> Self {
        Self {
            hours: value.hour() as i32,
            minutes: value.minute() as i32,
            seconds: value.second() as i32,
            nanos: value.nanosecond() as i32,
        }
    }
}

impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            #[serde(default)]
            hours: i32,
            #[serde(default)]
            minutes: i32,
            #[serde(default)]
            seconds: i32,
            #[serde(default)]
            nanos: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        TimeOfDay::new(raw.hours, raw.minutes, raw.seconds, raw.nanos)
            .map_err(serde::de::Error::custom)
    }
}
