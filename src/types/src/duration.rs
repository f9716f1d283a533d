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

use crate::constants::{
    NANOSECONDS_PER_DAY, NANOSECONDS_PER_HOUR, NANOSECONDS_PER_MINUTE, NANOSECONDS_PER_SECOND,
};

const DAY: i128 = NANOSECONDS_PER_DAY as i128;

/// A signed, fixed-length span of time with nanosecond resolution.
///
/// A [Duration] is independent of any calendar: a "day" here is always
/// exactly 24 hours. It is stored as a whole number of days plus a
/// non-negative nanosecond-of-day, with the day count floored, so a duration
/// of -1ns is stored as -1 days plus 86,399,999,999,999ns.
///
/// The component accessors ([days][Duration::days],
/// [nanosecond_of_day][Duration::nanosecond_of_day],
/// [subsecond_nanoseconds][Duration::subsecond_nanoseconds]) instead truncate
/// toward zero, so all returned components carry the sign of the duration.
///
/// # Examples
/// ```
/// # use tempora_types::Duration;
/// let d = Duration::from_hours(48) + Duration::from_seconds(3);
/// assert_eq!(d.days(), 2);
/// assert_eq!(d.nanosecond_of_day(), 3_000_000_000);
///
/// let d = Duration::from_nanoseconds(-1);
/// assert_eq!(d.days(), 0);
/// assert_eq!(d.subsecond_nanoseconds(), -1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    /// Whole days, floored (rounded toward the start of time).
    floor_days: i64,
    /// Nanosecond within the floor day. Always in `[0, NANOSECONDS_PER_DAY)`.
    nano_of_floor_day: i64,
}

impl Duration {
    /// The zero-length duration.
    pub const ZERO: Duration = Duration {
        floor_days: 0,
        nano_of_floor_day: 0,
    };

    pub(crate) fn from_total_nanoseconds(total: i128) -> Self {
        Self {
            floor_days: total.div_euclid(DAY) as i64,
            nano_of_floor_day: total.rem_euclid(DAY) as i64,
        }
    }

    /// Creates a duration of the given number of standard (24 hour) days.
    pub fn from_days(days: i64) -> Self {
        Self {
            floor_days: days,
            nano_of_floor_day: 0,
        }
    }

    /// Creates a duration of the given number of hours.
    pub fn from_hours(hours: i64) -> Self {
        Self::from_total_nanoseconds(hours as i128 * NANOSECONDS_PER_HOUR as i128)
    }

    /// Creates a duration of the given number of minutes.
    pub fn from_minutes(minutes: i64) -> Self {
        Self::from_total_nanoseconds(minutes as i128 * NANOSECONDS_PER_MINUTE as i128)
    }

    /// Creates a duration of the given number of seconds.
    pub fn from_seconds(seconds: i64) -> Self {
        Self::from_total_nanoseconds(seconds as i128 * NANOSECONDS_PER_SECOND as i128)
    }

    /// Creates a duration of the given number of milliseconds.
    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self::from_total_nanoseconds(milliseconds as i128 * 1_000_000)
    }

    /// Creates a duration of the given number of nanoseconds.
    pub fn from_nanoseconds(nanoseconds: i64) -> Self {
        Self::from_total_nanoseconds(nanoseconds as i128)
    }

    /// The whole number of standard days in this duration, truncated toward
    /// zero.
    pub fn days(&self) -> i64 {
        (self.total_nanoseconds() / DAY) as i64
    }

    /// The remainder after removing whole days, in nanoseconds.
    ///
    /// The result is in the open interval
    /// `(-NANOSECONDS_PER_DAY, NANOSECONDS_PER_DAY)` and carries the sign of
    /// the duration.
    pub fn nanosecond_of_day(&self) -> i64 {
        (self.total_nanoseconds() % DAY) as i64
    }

    /// The sub-second component of this duration, in nanoseconds, carrying
    /// the sign of the duration.
    pub fn subsecond_nanoseconds(&self) -> i32 {
        (self.total_nanoseconds() % NANOSECONDS_PER_SECOND as i128) as i32
    }

    /// The total length of this duration in nanoseconds.
    pub fn total_nanoseconds(&self) -> i128 {
        self.floor_days as i128 * DAY + self.nano_of_floor_day as i128
    }
}

impl std::ops::Add for Duration {
    type Output = Duration;
    fn add(self, rhs: Duration) -> Duration {
        Self::from_total_nanoseconds(self.total_nanoseconds() + rhs.total_nanoseconds())
    }
}

impl std::ops::Sub for Duration {
    type Output = Duration;
    fn sub(self, rhs: Duration) -> Duration {
        Self::from_total_nanoseconds(self.total_nanoseconds() - rhs.total_nanoseconds())
    }
}

impl std::ops::Neg for Duration {
    type Output = Duration;
    fn neg(self) -> Duration {
        Self::from_total_nanoseconds(-self.total_nanoseconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn zero() {
        assert_eq!(Duration::ZERO, Duration::default());
        assert_eq!(Duration::ZERO.total_nanoseconds(), 0);
        assert_eq!(Duration::from_days(0), Duration::ZERO);
    }

    #[test_case(Duration::from_hours(48), 2, 0, 0; "whole days")]
    #[test_case(Duration::from_hours(49), 2, NANOSECONDS_PER_HOUR, 0; "days and hours")]
    #[test_case(Duration::from_seconds(1) + Duration::from_nanoseconds(5), 0, 1_000_000_005, 5; "subsecond")]
    #[test_case(Duration::from_nanoseconds(-1), 0, -1, -1; "negative nanosecond")]
    #[test_case(Duration::from_hours(-25), -1, -NANOSECONDS_PER_HOUR, 0; "negative day and hour")]
    #[test_case(Duration::from_seconds(-1) - Duration::from_nanoseconds(5), 0, -1_000_000_005, -5; "negative subsecond")]
    fn truncating_components(d: Duration, days: i64, nano_of_day: i64, subsecond: i32) {
        assert_eq!(d.days(), days);
        assert_eq!(d.nanosecond_of_day(), nano_of_day);
        assert_eq!(d.subsecond_nanoseconds(), subsecond);
    }

    // The floored internal representation must still compare equal across
    // construction routes.
    #[test]
    fn construction_routes_agree() {
        assert_eq!(
            Duration::from_hours(48) + Duration::from_seconds(3),
            Duration::from_seconds(48 * 3600 + 3)
        );
        assert_eq!(
            Duration::from_seconds(-1),
            Duration::from_nanoseconds(-1_000_000_000)
        );
        assert_eq!(-Duration::from_minutes(90), Duration::from_minutes(-90));
    }

    #[test]
    fn extreme_totals_do_not_overflow() {
        let d = Duration::from_seconds(i64::MAX);
        assert_eq!(d.total_nanoseconds(), i64::MAX as i128 * 1_000_000_000);
        let d = Duration::from_seconds(i64::MIN);
        assert_eq!(d.total_nanoseconds(), i64::MIN as i128 * 1_000_000_000);
    }

    #[test]
    fn ordering_follows_timeline() {
        assert!(Duration::from_nanoseconds(-1) < Duration::ZERO);
        assert!(Duration::from_days(1) > Duration::from_hours(23));
    }
}
