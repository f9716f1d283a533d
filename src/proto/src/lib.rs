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

//! Protocol Buffer well-known types for the Tempora value types.
//!
//! This crate defines the interchange structs used by protobuf-style APIs
//! ([Duration], [Timestamp], [Date], [TimeOfDay], [DayOfWeek]) and the
//! conversions between them and the [tempora-types] value model. The structs
//! validate their documented field ranges on construction and on
//! deserialization; the conversions validate the narrower constraints of the
//! target side and never clamp, truncate, or default out-of-range input.
//!
//! With the `prost` feature the types also convert to and from their
//! [prost-types](https://crates.io/crates/prost-types) counterparts.
//!
//! [tempora-types]: https://crates.io/crates/tempora-types

mod date;
pub use crate::date::*;
mod day_of_week;
pub use crate::day_of_week::*;
mod duration;
pub use crate::duration::*;
mod time_of_day;
pub use crate::time_of_day::*;
mod timestamp;
pub use crate::timestamp::*;

#[cfg(feature = "prost")]
mod prost;
