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

//! Temporal value types for the Tempora serialization crates.
//!
//! This crate defines the value model shared by [tempora-json] and
//! [tempora-proto]: instants, durations, calendar dates and times, offsets,
//! zones, and the compound interval types, together with the bidirectional
//! text patterns used to render them. The types are plain values: cheap to
//! copy or clone, immutable, and safe to share between threads.
//!
//! Calendar arithmetic is deliberately out of scope. The types store
//! components and validate ranges; anything beyond that (zone rule
//! evaluation, date math) belongs to a full date/time library.
//!
//! [tempora-json]: https://crates.io/crates/tempora-json
//! [tempora-proto]: https://crates.io/crates/tempora-proto

pub mod constants;

mod annual_date;
pub use crate::annual_date::*;
mod calendar;
pub use crate::calendar::*;
mod date;
pub use crate::date::*;
mod date_interval;
pub use crate::date_interval::*;
mod day_of_week;
pub use crate::day_of_week::*;
mod duration;
pub use crate::duration::*;
mod instant;
pub use crate::instant::*;
mod interval;
pub use crate::interval::*;
mod local_date_time;
pub use crate::local_date_time::*;
mod local_time;
pub use crate::local_time::*;
mod offset;
pub use crate::offset::*;
mod offset_date;
pub use crate::offset_date::*;
mod offset_date_time;
pub use crate::offset_date_time::*;
mod offset_time;
pub use crate::offset_time::*;
mod period;
pub use crate::period::*;
mod zone;
pub use crate::zone::*;
mod zoned_date_time;
pub use crate::zoned_date_time::*;

pub mod text;
