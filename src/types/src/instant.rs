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

use crate::constants::NANOSECONDS_PER_SECOND;
use crate::duration::Duration;

const NS: i128 = NANOSECONDS_PER_SECOND as i128;

/// A point on the global timeline, with nanosecond resolution.
///
/// An [Instant] has no associated calendar system, time zone, or offset: it
/// identifies a moment, not a clock reading. Two instants are equal exactly
/// when they identify the same moment.
///
/// Instants are stored as a count of nanoseconds relative to the Unix epoch
/// (1970-01-01T00:00:00Z) and are restricted to the range
/// `0000-01-01T00:00:00Z` to `9999-12-31T23:59:59.999999999Z`. Restricting to
/// that range ensures every instant has an ISO-8601 / RFC 3339 text form.
///
/// # Examples
/// ```
/// # use tempora_types::{Instant, InstantError};
/// let epoch = Instant::from_unix_seconds(0)?;
/// assert_eq!(epoch.unix_seconds(), 0);
///
/// let i = Instant::from_utc(2012, 1, 2, 3, 4, 5)?.plus_nanoseconds(670_000_000)?;
/// assert_eq!(i.nanosecond_of_second(), 670_000_000);
/// # Ok::<(), InstantError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    /// Nanoseconds since the Unix epoch. Negative before the epoch.
    nanos: i128,
}

/// Represents failures in creating [Instant] values.
///
/// # Examples
/// ```
/// # use tempora_types::{Instant, InstantError};
/// let i = Instant::from_unix_seconds(Instant::MAX_UNIX_SECONDS + 1);
/// assert!(matches!(i, Err(InstantError::OutOfRange)));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum InstantError {
    /// The requested moment is outside the representable range.
    #[error(
        "instant out of range: instants must be between 0000-01-01T00:00:00Z and 9999-12-31T23:59:59.999999999Z"
    )]
    OutOfRange,
}

type Error = InstantError;

impl Instant {
    // Obtained via: `date -u +%s --date='0000-01-01T00:00:00Z'`
    /// The minimum value for the `unix_seconds` component. Corresponds to `0000-01-01T00:00:00Z`.
    pub const MIN_UNIX_SECONDS: i64 = -62_167_219_200;

    // Obtained via: `date -u +%s --date='9999-12-31T23:59:59Z'`
    /// The maximum value for the `unix_seconds` component. Corresponds to `9999-12-31T23:59:59Z`.
    pub const MAX_UNIX_SECONDS: i64 = 253_402_300_799;

    const MIN_NANOS: i128 = Self::MIN_UNIX_SECONDS as i128 * NS;
    const MAX_NANOS: i128 = Self::MAX_UNIX_SECONDS as i128 * NS + (NS - 1);

    /// The earliest representable instant, `0000-01-01T00:00:00Z`.
    pub const MIN: Instant = Instant {
        nanos: Self::MIN_NANOS,
    };

    /// The latest representable instant, `9999-12-31T23:59:59.999999999Z`.
    pub const MAX: Instant = Instant {
        nanos: Self::MAX_NANOS,
    };

    /// Creates an [Instant] from a count of nanoseconds since the Unix epoch.
    pub fn from_unix_nanos(nanos: i128) -> Result<Self, Error> {
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { nanos })
    }

    /// Creates an [Instant] from a count of seconds since the Unix epoch.
    ///
    /// # Examples
    /// ```
    /// # use tempora_types::{Instant, InstantError};
    /// let i = Instant::from_unix_seconds(1_325_473_445)?;
    /// assert_eq!(i, Instant::from_utc(2012, 1, 2, 3, 4, 5)?);
    /// # Ok::<(), InstantError>(())
    /// ```
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, Error> {
        Self::from_unix_nanos(seconds as i128 * NS)
    }

    /// Creates an [Instant] from seconds since the Unix epoch plus a
    /// non-negative sub-second nanosecond component.
    ///
    /// The nanosecond component always counts forward in time, even for
    /// instants before the epoch, and must be less than one second.
    pub fn from_unix_seconds_and_nanos(seconds: i64, nanos: u32) -> Result<Self, Error> {
        if nanos as i128 >= NS {
            return Err(Error::OutOfRange);
        }
        Self::from_unix_nanos(seconds as i128 * NS + nanos as i128)
    }

    /// Creates an [Instant] from a civil date and time in UTC.
    ///
    /// # Examples
    /// ```
    /// # use tempora_types::{Instant, InstantError};
    /// let i = Instant::from_utc(1970, 1, 1, 0, 0, 0)?;
    /// assert_eq!(i.unix_seconds(), 0);
    /// # Ok::<(), InstantError>(())
    /// ```
    pub fn from_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, Error> {
        let month = time::Month::try_from(month).map_err(|_| Error::OutOfRange)?;
        let date = time::Date::from_calendar_date(year, month, day).map_err(|_| Error::OutOfRange)?;
        let time = time::Time::from_hms(hour, minute, second).map_err(|_| Error::OutOfRange)?;
        Self::from_unix_nanos(date.with_time(time).assume_utc().unix_timestamp_nanos())
    }

    /// Returns this instant advanced by the given number of nanoseconds,
    /// which may be negative.
    pub fn plus_nanoseconds(self, nanos: i64) -> Result<Self, Error> {
        Self::from_unix_nanos(self.nanos + nanos as i128)
    }

    /// Returns this instant advanced by `duration`.
    pub fn plus(self, duration: Duration) -> Result<Self, Error> {
        Self::from_unix_nanos(self.nanos + duration.total_nanoseconds())
    }

    /// The number of whole seconds between the Unix epoch and this instant,
    /// truncated toward the start of time.
    ///
    /// Together with [nanosecond_of_second][Instant::nanosecond_of_second]
    /// this decomposes the instant without loss: the sub-second part always
    /// counts forward from the returned second.
    ///
    /// # Examples
    /// ```
    /// # use tempora_types::{Instant, InstantError};
    /// // One nanosecond before the epoch.
    /// let i = Instant::from_unix_nanos(-1)?;
    /// assert_eq!(i.unix_seconds(), -1);
    /// assert_eq!(i.nanosecond_of_second(), 999_999_999);
    /// # Ok::<(), InstantError>(())
    /// ```
    pub fn unix_seconds(&self) -> i64 {
        self.nanos.div_euclid(NS) as i64
    }

    /// The non-negative sub-second component of this instant, in nanoseconds.
    pub fn nanosecond_of_second(&self) -> i32 {
        self.nanos.rem_euclid(NS) as i32
    }

    /// The number of nanoseconds between the Unix epoch and this instant.
    pub fn unix_nanos(&self) -> i128 {
        self.nanos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    // The boundary constants are precomputed; check them against the `time`
    // crate's own calendar rules.
    #[test]
    fn boundary_seconds() {
        let min = time::Date::from_calendar_date(0, time::Month::January, 1)
            .unwrap()
            .midnight()
            .assume_utc();
        assert_eq!(min.unix_timestamp(), Instant::MIN_UNIX_SECONDS);
        let max = time::Date::from_calendar_date(9999, time::Month::December, 31)
            .unwrap()
            .with_hms(23, 59, 59)
            .unwrap()
            .assume_utc();
        assert_eq!(max.unix_timestamp(), Instant::MAX_UNIX_SECONDS);
    }

    #[test]
    fn epoch() -> Result {
        let epoch = Instant::from_unix_seconds(0)?;
        assert_eq!(epoch, Instant::from_utc(1970, 1, 1, 0, 0, 0)?);
        assert_eq!(epoch, Instant::default());
        Ok(())
    }

    #[test_case(Instant::MIN_UNIX_SECONDS; "start of range")]
    #[test_case(Instant::MAX_UNIX_SECONDS; "end of range")]
    #[test_case(0; "epoch")]
    #[test_case(-62_135_596_800; "start of year 1")]
    fn from_unix_seconds_in_range(seconds: i64) -> Result {
        let i = Instant::from_unix_seconds(seconds)?;
        assert_eq!(i.unix_seconds(), seconds);
        assert_eq!(i.nanosecond_of_second(), 0);
        Ok(())
    }

    #[test_case(Instant::MIN_UNIX_SECONDS - 1; "below range")]
    #[test_case(Instant::MAX_UNIX_SECONDS + 1; "above range")]
    fn from_unix_seconds_out_of_range(seconds: i64) {
        let i = Instant::from_unix_seconds(seconds);
        assert!(matches!(i, Err(Error::OutOfRange)), "{i:?}");
    }

    #[test]
    fn max_has_full_nanos() -> Result {
        let i = Instant::from_unix_seconds_and_nanos(Instant::MAX_UNIX_SECONDS, 999_999_999)?;
        assert_eq!(i, Instant::MAX);
        let i = Instant::from_unix_seconds_and_nanos(Instant::MAX_UNIX_SECONDS, 1_000_000_000);
        assert!(matches!(i, Err(Error::OutOfRange)));
        Ok(())
    }

    #[test_case(1, 500_000_000, 1, 500_000_000; "after epoch")]
    #[test_case(-1, 250_000_000, -1, 250_000_000; "before epoch")]
    fn seconds_and_nanos_decomposition(
        seconds: i64,
        nanos: u32,
        want_seconds: i64,
        want_nanos: i32,
    ) -> Result {
        let i = Instant::from_unix_seconds_and_nanos(seconds, nanos)?;
        assert_eq!(i.unix_seconds(), want_seconds);
        assert_eq!(i.nanosecond_of_second(), want_nanos);
        Ok(())
    }

    #[test]
    fn plus_nanoseconds_crosses_second_boundary() -> Result {
        let i = Instant::from_unix_seconds(10)?.plus_nanoseconds(-1)?;
        assert_eq!(i.unix_seconds(), 9);
        assert_eq!(i.nanosecond_of_second(), 999_999_999);
        Ok(())
    }

    #[test]
    fn plus_duration() -> Result {
        let i = Instant::from_utc(2012, 1, 2, 3, 4, 5)?.plus(Duration::from_milliseconds(670))?;
        assert_eq!(i.nanosecond_of_second(), 670_000_000);
        assert_eq!(i.unix_seconds(), Instant::from_utc(2012, 1, 2, 3, 4, 5)?.unix_seconds());
        Ok(())
    }

    #[test]
    fn from_utc_rejects_bad_components() {
        assert!(Instant::from_utc(2007, 2, 29, 0, 0, 0).is_err());
        assert!(Instant::from_utc(2012, 13, 1, 0, 0, 0).is_err());
        assert!(Instant::from_utc(2012, 1, 1, 24, 0, 0).is_err());
    }
}
