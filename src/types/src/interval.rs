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

use crate::instant::Instant;

/// An interval between two instants, either end of which may be open.
///
/// A present start is inclusive and a present end exclusive. An absent start
/// means "since the beginning of time"; an absent end means "until the end of
/// time".
///
/// # Examples
/// ```
/// # use tempora_types::{Instant, Interval};
/// let start = Instant::from_utc(2012, 1, 2, 3, 4, 5).unwrap();
/// let open_ended = Interval::new(Some(start), None).unwrap();
/// assert!(open_ended.has_start());
/// assert!(!open_ended.has_end());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    start: Option<Instant>,
    end: Option<Instant>,
}

/// Represents failures in creating [Interval] values.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum IntervalError {
    /// The end instant is earlier than the start instant.
    #[error("the end of an interval must not be earlier than its start")]
    EndBeforeStart,
}

impl Interval {
    /// Creates an interval from optional start and end instants.
    pub fn new(start: Option<Instant>, end: Option<Instant>) -> Result<Self, IntervalError> {
        if let (Some(s), Some(e)) = (&start, &end) {
            if e < s {
                return Err(IntervalError::EndBeforeStart);
            }
        }
        Ok(Self { start, end })
    }

    /// The start instant, if the interval has one.
    pub fn start(&self) -> Option<Instant> {
        self.start
    }

    /// The end instant, if the interval has one.
    pub fn end(&self) -> Option<Instant> {
        self.end
    }

    /// Whether the interval has a start.
    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    /// Whether the interval has an end.
    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }
}
