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

use tempora_types::constants::{NANOSECONDS_PER_SECOND, SECONDS_PER_DAY};

/// The well-known protobuf duration: signed seconds plus signed sub-second
/// nanoseconds.
///
/// The range is approximately ±10,000 years, narrower than
/// [tempora_types::Duration]; converting a native duration that does not fit
/// is an error, never a clamp. When both fields are non-zero they must have
/// the same sign, so `-1.5s` is `{seconds: -1, nanos: -500_000_000}` —
/// unlike [Timestamp][crate::Timestamp], whose nanos always count forward.
/// That asymmetry is part of the wire contract.
///
/// # Examples
/// ```
/// # use tempora_proto::{Duration, DurationError};
/// let d = Duration::new(-1, -500_000_000)?;
/// assert_eq!(d.seconds(), -1);
/// assert_eq!(d.nanos(), -500_000_000);
///
/// let d = Duration::new(-1, 500_000_000);
/// assert!(matches!(d, Err(DurationError::MismatchedSigns)));
/// # Ok::<(), DurationError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Duration {
    /// Signed seconds of the span of time.
    seconds: i64,
    /// Signed sub-second nanoseconds, same sign as `seconds` when both are
    /// non-zero.
    nanos: i32,
}

/// Represents failures in creating or converting [Duration] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DurationError {
    /// The seconds and/or nanoseconds component was out of range.
    #[error("duration seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The seconds and nanoseconds components have opposite signs.
    #[error("duration seconds and nanoseconds must not have opposite signs")]
    MismatchedSigns,
}

type Error = DurationError;

impl Duration {
    /// The maximum value for the `seconds` component, approximately 10,000
    /// years:
    ///     60 sec/min * 60 min/hr * 24 hr/day * 365.25 days/year * 10000 years
    pub const MAX_SECONDS: i64 = 315_576_000_000;

    /// The minimum value for the `seconds` component, approximately -10,000
    /// years.
    pub const MIN_SECONDS: i64 = -Self::MAX_SECONDS;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = NANOSECONDS_PER_SECOND as i32 - 1;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = -Self::MAX_NANOS;

    /// Creates a [Duration], validating both components and their sign
    /// consistency.
    ///
    /// # Examples
    /// ```
    /// # use tempora_proto::{Duration, DurationError};
    /// assert!(Duration::new(Duration::MAX_SECONDS, 999_999_999).is_ok());
    /// assert!(matches!(
    ///     Duration::new(Duration::MAX_SECONDS + 1, 0),
    ///     Err(DurationError::OutOfRange)
    /// ));
    /// # Ok::<(), DurationError>(())
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        if seconds != 0 && nanos != 0 && (seconds < 0) != (nanos < 0) {
            return Err(Error::MismatchedSigns);
        }
        Ok(Self { seconds, nanos })
    }

    /// The seconds component.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The sub-second nanoseconds component.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

/// Converts a native duration, rejecting values outside the protobuf range.
///
/// The native duration decomposes into truncating components (whole days,
/// nanosecond-of-day, sub-second nanoseconds), all carrying the sign of the
/// duration, so the recombined seconds and nanoseconds are sign-consistent
/// by construction. The day arithmetic runs in 64 bits so extreme native
/// durations fail cleanly instead of wrapping.
impl TryFrom<tempora_types::Duration> for Duration {
    type Error = DurationError;

    fn try_from(value: tempora_types::Duration) -> Result<Self, Self::Error> {
        let days = value.days();
        let second_of_day = value.nanosecond_of_day() / NANOSECONDS_PER_SECOND;
        let seconds = days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|s| s.checked_add(second_of_day))
            .ok_or(Error::OutOfRange)?;
        Self::new(seconds, value.subsecond_nanoseconds())
    }
}

/// Converts to a native duration. Every valid protobuf duration is
/// representable natively, so this direction cannot fail.
impl From<Duration> for tempora_types::Duration {
    fn from(value: Duration) -> Self {
        tempora_types::Duration::from_seconds(value.seconds)
            + tempora_types::Duration::from_nanoseconds(value.nanos as i64)
    }
}

impl<'de> serde::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            #[serde(default)]
            seconds: i64,
            #[serde(default)]
            nanos: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Duration::new(raw.seconds, raw.nanos).map_err(serde::de::Error::custom)
    }
}
