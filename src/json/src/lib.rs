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

//! JSON conversion for the Tempora value types.
//!
//! Values convert to and from [serde_json::Value] through converter objects:
//! small, immutable, shareable artifacts that each map one value type to one
//! JSON shape. A [JsonOptions] holds the registered converter per type plus
//! the property-naming configuration, and is the entry point for both
//! directions:
//!
//! ```
//! # use std::sync::Arc;
//! # use tempora_json::JsonOptions;
//! # use tempora_types::{FixedZoneProvider, Instant};
//! let options = JsonOptions::new()
//!     .configure_for_temporal(Arc::new(FixedZoneProvider::new(["Etc/UTC"])));
//!
//! let instant = Instant::from_utc(2012, 1, 2, 3, 4, 5).unwrap();
//! let json = options.serialize(&instant).unwrap();
//! assert_eq!(json, serde_json::json!("2012-01-02T03:04:05Z"));
//! assert_eq!(options.deserialize::<Instant>(&json).unwrap(), instant);
//! ```
//!
//! Failed conversions never produce defaults: every malformed token, missing
//! field, out-of-range component, or unknown zone id surfaces as an
//! [Error], and a failure in a nested field fails the whole enclosing
//! conversion.

mod annual_date;
pub use crate::annual_date::*;
mod converter;
pub use crate::converter::*;
pub mod converters;
mod date_interval;
pub use crate::date_interval::*;
mod error;
pub use crate::error::*;
mod interval;
pub use crate::interval::*;
mod iso_interval;
pub use crate::iso_interval::*;
mod options;
pub use crate::options::*;
mod pattern_converter;
pub use crate::pattern_converter::*;
mod settings;
pub use crate::settings::*;
mod time_zone;
pub use crate::time_zone::*;
