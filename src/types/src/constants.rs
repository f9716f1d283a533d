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

//! Time unit conversion factors used throughout the Tempora crates.
//!
//! All days are exactly 24 hours and all minutes exactly 60 seconds; leap
//! seconds are not modeled.

/// The number of nanoseconds in a second.
pub const NANOSECONDS_PER_SECOND: i64 = 1_000_000_000;

/// The number of nanoseconds in a minute.
pub const NANOSECONDS_PER_MINUTE: i64 = 60 * NANOSECONDS_PER_SECOND;

/// The number of nanoseconds in an hour.
pub const NANOSECONDS_PER_HOUR: i64 = 60 * NANOSECONDS_PER_MINUTE;

/// The number of nanoseconds in a standard (24 hour) day.
pub const NANOSECONDS_PER_DAY: i64 = 24 * NANOSECONDS_PER_HOUR;

/// The number of seconds in a minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// The number of seconds in an hour.
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;

/// The number of seconds in a standard (24 hour) day.
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
