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

/// The calendar system a date's components are expressed in.
///
/// Only the ISO calendar participates in serialization: converters reject
/// values tagged with any other calendar instead of silently reinterpreting
/// their components. The set is closed on purpose; supporting a new calendar
/// is an API change, not a runtime discovery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum CalendarSystem {
    /// The ISO-8601 calendar, i.e. the proleptic Gregorian calendar.
    #[default]
    Iso,
    /// The Julian calendar.
    Julian,
}

impl CalendarSystem {
    /// A stable identifier for the calendar system.
    pub fn id(&self) -> &'static str {
        match self {
            CalendarSystem::Iso => "ISO",
            CalendarSystem::Julian => "Julian",
        }
    }
}
