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

use tempora_types::IsoDayOfWeek;

/// The well-known protobuf day of the week.
///
/// Both this type and [IsoDayOfWeek] number Monday 1 through Sunday 7, so
/// the mapping between them is the identity, with
/// [Unspecified][DayOfWeek::Unspecified] standing in for
/// [IsoDayOfWeek::None] on the wire.
///
/// # Examples
/// ```
/// # use tempora_proto::DayOfWeek;
/// # use tempora_types::IsoDayOfWeek;
/// assert_eq!(DayOfWeek::from(IsoDayOfWeek::Tuesday), DayOfWeek::Tuesday);
/// assert_eq!(IsoDayOfWeek::from(DayOfWeek::Unspecified), IsoDayOfWeek::None);
/// assert!(DayOfWeek::try_from(8).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DayOfWeek {
    /// The day of the week is unspecified.
    #[default]
    Unspecified = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

/// The error for converting out-of-range numbers to [DayOfWeek].
#[derive(thiserror::Error, Debug)]
#[error("day-of-week number out of range (expected 0 through 7): {0}")]
pub struct DayOfWeekOutOfRange(i32);

impl DayOfWeek {
    /// The wire number of this day, with 0 for
    /// [Unspecified][DayOfWeek::Unspecified].
    pub fn number(self) -> i32 {
        self as i32
    }

    /// The proto enum value name.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Unspecified => "DAY_OF_WEEK_UNSPECIFIED",
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "DAY_OF_WEEK_UNSPECIFIED" => Some(DayOfWeek::Unspecified),
            "MONDAY" => Some(DayOfWeek::Monday),
            "TUESDAY" => Some(DayOfWeek::Tuesday),
            "WEDNESDAY" => Some(DayOfWeek::Wednesday),
            "THURSDAY" => Some(DayOfWeek::Thursday),
            "FRIDAY" => Some(DayOfWeek::Friday),
            "SATURDAY" => Some(DayOfWeek::Saturday),
            "SUNDAY" => Some(DayOfWeek::Sunday),
            _ => None,
        }
    }
}

impl TryFrom<i32> for DayOfWeek {
    type Error = DayOfWeekOutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DayOfWeek::Unspecified),
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            7 => Ok(DayOfWeek::Sunday),
            n => Err(DayOfWeekOutOfRange(n)),
        }
    }
}

/// The identity mapping; [IsoDayOfWeek::None] becomes
/// [Unspecified][DayOfWeek::Unspecified].
impl From<IsoDayOfWeek> for DayOfWeek {
    fn from(value: IsoDayOfWeek) -> Self {
        match value {
            IsoDayOfWeek::None => DayOfWeek::Unspecified,
            IsoDayOfWeek::Monday => DayOfWeek::Monday,
            IsoDayOfWeek::Tuesday => DayOfWeek::Tuesday,
            IsoDayOfWeek::Wednesday => DayOfWeek::Wednesday,
            IsoDayOfWeek::Thursday => DayOfWeek::Thursday,
            IsoDayOfWeek::Friday => DayOfWeek::Friday,
            IsoDayOfWeek::Saturday => DayOfWeek::Saturday,
            IsoDayOfWeek::Sunday => DayOfWeek::Sunday,
        }
    }
}

/// The identity mapping; [Unspecified][DayOfWeek::Unspecified] becomes
/// [IsoDayOfWeek::None].
impl From<DayOfWeek> for IsoDayOfWeek {
    fn from(value: DayOfWeek) -> Self {
        match value {
            DayOfWeek::Unspecified => IsoDayOfWeek::None,
            DayOfWeek::Monday => IsoDayOfWeek::Monday,
            DayOfWeek::Tuesday => IsoDayOfWeek::Tuesday,
            DayOfWeek::Wednesday => IsoDayOfWeek::Wednesday,
            DayOfWeek::Thursday => IsoDayOfWeek::Thursday,
            DayOfWeek::Friday => IsoDayOfWeek::Friday,
            DayOfWeek::Saturday => IsoDayOfWeek::Saturday,
            DayOfWeek::Sunday => IsoDayOfWeek::Sunday,
        }
    }
}

/// Serializes as the proto enum value name, the proto3 JSON convention.
impl serde::Serialize for DayOfWeek {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

struct DayOfWeekVisitor;

impl serde::de::Visitor<'_> for DayOfWeekVisitor {
    type Value = DayOfWeek;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a day-of-week enum name or its number, 0 through 7")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .ok()
            .and_then(|n| DayOfWeek::try_from(n).ok())
            .ok_or_else(|| E::custom(format!("day-of-week number out of range: {value}")))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value)
            .map_err(|_| E::custom(format!("day-of-week number out of range: {value}")))
            .and_then(|n| self.visit_i64(n))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        DayOfWeek::from_name(value)
            .ok_or_else(|| E::custom(format!("unknown day-of-week name: {value}")))
    }
}

/// Deserializes from either the enum value name or its number.
impl<'de> serde::Deserialize<'de> for DayOfWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(DayOfWeekVisitor)
    }
}
