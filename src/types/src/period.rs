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

/// A calendar-relative amount of time, split into separate components.
///
/// Unlike [Duration][crate::Duration], a period's components are not
/// interchangeable without a reference date: "1 month" is 28 to 31 days
/// depending on where it is applied, so components are never normalized into
/// each other. `P2DT3H90M` stays 2 days, 3 hours, and 90 minutes.
///
/// Components may be negative independently of each other.
///
/// # Examples
/// ```
/// # use tempora_types::Period;
/// let p = Period::from_days(2) + Period::from_hours(3) + Period::from_minutes(90);
/// assert_eq!(p.days(), 2);
/// assert_eq!(p.minutes(), 90);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Period {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
    nanoseconds: i64,
}

macro_rules! period_component {
    ($field:ident, $from:ident, $doc:literal) => {
        #[doc = concat!("Creates a period of the given number of ", $doc, ".")]
        pub fn $from($field: i64) -> Self {
            Self {
                $field,
                ..Self::ZERO
            }
        }

        #[doc = concat!("The ", $doc, " component.")]
        pub fn $field(&self) -> i64 {
            self.$field
        }
    };
}

impl Period {
    /// The period with all components zero.
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
        nanoseconds: 0,
    };

    period_component!(years, from_years, "years");
    period_component!(months, from_months, "months");
    period_component!(weeks, from_weeks, "weeks");
    period_component!(days, from_days, "days");
    period_component!(hours, from_hours, "hours");
    period_component!(minutes, from_minutes, "minutes");
    period_component!(seconds, from_seconds, "seconds");
    period_component!(milliseconds, from_milliseconds, "milliseconds");
    period_component!(nanoseconds, from_nanoseconds, "nanoseconds");

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl std::ops::Add for Period {
    type Output = Period;

    /// Adds two periods component-wise, without normalization.
    fn add(self, rhs: Period) -> Period {
        Period {
            years: self.years + rhs.years,
            months: self.months + rhs.months,
            weeks: self.weeks + rhs.weeks,
            days: self.days + rhs.days,
            hours: self.hours + rhs.hours,
            minutes: self.minutes + rhs.minutes,
            seconds: self.seconds + rhs.seconds,
            milliseconds: self.milliseconds + rhs.milliseconds,
            nanoseconds: self.nanoseconds + rhs.nanoseconds,
        }
    }
}
