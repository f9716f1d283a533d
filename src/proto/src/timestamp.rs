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

use tempora_types::Instant;

/// The well-known protobuf timestamp: seconds since the Unix epoch plus
/// non-negative sub-second nanoseconds.
///
/// The valid range is `0001-01-01T00:00:00Z` through
/// `9999-12-31T23:59:59.999999999Z`, narrower than [Instant]; converting an
/// instant outside it is an error, never a clamp. The nanos field always
/// counts forward in time, including before the epoch, so one nanosecond
/// before the epoch is `{seconds: -1, nanos: 999_999_999}` — deliberately
/// unlike [Duration][crate::Duration], whose nanos carry the sign.
///
/// # Examples
/// ```
/// # use tempora_proto::{Timestamp, TimestampError};
/// let ts = Timestamp::new(-1, 999_999_999)?;
/// assert_eq!(ts.seconds(), -1);
///
/// let ts = Timestamp::new(0, -1);
/// assert!(matches!(ts, Err(TimestampError::OutOfRange)));
/// # Ok::<(), TimestampError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Timestamp {
    /// Seconds of UTC time since the Unix epoch.
    seconds: i64,
    /// Non-negative sub-second nanoseconds, counting forward in time.
    nanos: i32,
}

/// Represents failures in creating or converting [Timestamp] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// The seconds and/or nanoseconds component was out of range.
    #[error("timestamp seconds and/or nanoseconds out of range")]
    OutOfRange,
}

type Error = TimestampError;

impl Timestamp {
    // Obtained via: `date -u +%s --date='0001-01-01T00:00:00Z'`
    /// The minimum value for the `seconds` component. Corresponds to `0001-01-01T00:00:00Z`.
    pub const MIN_SECONDS: i64 = -62_135_596_800;

    // Obtained via: `date -u +%s --date='9999-12-31T23:59:59Z'`
    /// The maximum value for the `seconds` component. Corresponds to `9999-12-31T23:59:59Z`.
    pub const MAX_SECONDS: i64 = 253_402_300_799;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = 0;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = 999_999_999;

    /// Creates a [Timestamp], validating both components.
    ///
    /// # Examples
    /// ```
    /// # use tempora_proto::{Timestamp, TimestampError};
    /// // The very start of year 1.
    /// assert!(Timestamp::new(Timestamp::MIN_SECONDS, 0).is_ok());
    /// // One second earlier is out of range.
    /// assert!(Timestamp::new(Timestamp::MIN_SECONDS - 1, 0).is_err());
    /// # Ok::<(), TimestampError>(())
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
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

/// Converts an instant, rejecting values before year 1 (instants themselves
/// extend back to year 0).
///
/// The instant's whole seconds truncate toward the start of time, so the
/// nanosecond remainder is always non-negative, exactly as the external form
/// requires.
impl TryFrom<Instant> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: Instant) -> Result<Self, Self::Error> {
        Self::new(value.unix_seconds(), value.nanosecond_of_second())
    }
}

/// Converts to an [Instant]. Every valid timestamp is a valid instant, so
/// the range check cannot fire for values built through
/// [Timestamp::new]; it guards input assembled through the `prost`
/// interop.
impl TryFrom<Timestamp> for Instant {
    type Error = TimestampError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        Instant::from_unix_seconds_and_nanos(value.seconds, value.nanos as u32)
            .map_err(|_| Error::OutOfRange)
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
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
        Timestamp::new(raw.seconds, raw.nanos).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test_case(Timestamp::MIN_SECONDS - 1, 0; "seconds below range")]
    #[test_case(Timestamp::MAX_SECONDS + 1, 0; "seconds above range")]
    #[test_case(0, -1; "negative nanos")]
    #[test_case(0, 1_000_000_000; "nanos above range")]
    fn new_out_of_range(seconds: i64, nanos: i32) {
        let ts = Timestamp::new(seconds, nanos);
        assert!(matches!(ts, Err(Error::OutOfRange)), "{ts:?}");
    }

    // The start of year 1 converts exactly; one second earlier cannot even
    // be represented as a timestamp.
    #[test]
    fn year_one_boundary() -> Result {
        let ts = Timestamp::new(Timestamp::MIN_SECONDS, 0)?;
        let instant = Instant::try_from(ts)?;
        assert_eq!(instant, Instant::from_utc(1, 1, 1, 0, 0, 0)?);
        assert_eq!(Timestamp::try_from(instant)?, ts);
        Ok(())
    }

    #[test]
    fn instant_before_year_one_is_rejected() -> Result {
        let instant = Instant::from_unix_seconds(Timestamp::MIN_SECONDS - 1)?;
        let ts = Timestamp::try_from(instant);
        assert!(matches!(ts, Err(Error::OutOfRange)), "{ts:?}");
        Ok(())
    }

    // Nanos count forward in time even before the epoch: truncation is
    // toward the start of time, not toward zero.
    #[test]
    fn pre_epoch_nanos_are_non_negative() -> Result {
        let instant = Instant::from_unix_nanos(-500_000_000)?;
        let ts = Timestamp::try_from(instant)?;
        assert_eq!(ts.seconds(), -1);
        assert_eq!(ts.nanos(), 500_000_000);
        assert_eq!(Instant::try_from(ts)?, instant);
        Ok(())
    }

    #[test_case(0, 0; "epoch")]
    #[test_case(Timestamp::MIN_SECONDS, 0; "start of year 1")]
    #[test_case(Timestamp::MAX_SECONDS, 999_999_999; "end of year 9999")]
    #[test_case(1_325_473_445, 123_456_789; "an ordinary moment")]
    fn round_trip_through_instant(seconds: i64, nanos: i32) -> Result {
        let ts = Timestamp::new(seconds, nanos)?;
        let roundtrip = Timestamp::try_from(Instant::try_from(ts)?)?;
        assert_eq!(roundtrip, ts);
        Ok(())
    }

    #[test]
    fn serde_object_form() -> Result {
        let ts = Timestamp::new(-62_135_596_800, 0)?;
        let json = serde_json::to_value(ts)?;
        assert_eq!(json, json!({"seconds": -62_135_596_800_i64, "nanos": 0}));
        assert_eq!(serde_json::from_value::<Timestamp>(json)?, ts);
        Ok(())
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let got = serde_json::from_value::<Timestamp>(json!({"seconds": -62_135_596_801_i64}));
        assert!(got.is_err(), "{got:?}");
        let got = serde_json::from_value::<Timestamp>(json!({"nanos": -1}));
        assert!(got.is_err(), "{got:?}");
    }
}
