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

/// A day of the week numbered as in ISO-8601, plus a `None` sentinel.
///
/// Monday is 1 and Sunday is 7. The `None` value (0) exists so that types
/// with an optional day-of-week field have an explicit "no value" state that
/// survives numeric round-trips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum IsoDayOfWeek {
    /// No day of the week.
    #[default]
    None = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

/// The error for converting out-of-range numbers to [IsoDayOfWeek].
#[derive(thiserror::Error, Debug)]
#[error("day-of-week number out of range (expected 0 through 7): {0}")]
pub struct IsoDayOfWeekOutOfRange(pub(crate) i32);

impl IsoDayOfWeek {
    /// The ISO-8601 number of this day, with 0 for [None][IsoDayOfWeek::None].
    pub fn number(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for IsoDayOfWeek {
    type Error = IsoDayOfWeekOutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(IsoDayOfWeek::None),
            1 => Ok(IsoDayOfWeek::Monday),
            2 => Ok(IsoDayOfWeek::Tuesday),
            3 => Ok(IsoDayOfWeek::Wednesday),
            4 => Ok(IsoDayOfWeek::Thursday),
            5 => Ok(IsoDayOfWeek::Friday),
            6 => Ok(IsoDayOfWeek::Saturday),
            7 => Ok(IsoDayOfWeek::Sunday),
            n => Err(IsoDayOfWeekOutOfRange(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn numbers_round_trip() {
        for n in 0..=7 {
            let day = IsoDayOfWeek::try_from(n).unwrap();
            assert_eq!(day.number(), n);
        }
    }

    #[test_case(-1)]
    #[test_case(8)]
    fn rejects_out_of_range(n: i32) {
        assert!(IsoDayOfWeek::try_from(n).is_err());
    }
}
