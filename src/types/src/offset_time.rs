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

use crate::local_time::LocalTime;
use crate::offset::Offset;

/// A time of day together with a fixed UTC offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: LocalTime,
    offset: Offset,
}

impl OffsetTime {
    /// Combines a time of day with an offset.
    pub fn new(time: LocalTime, offset: Offset) -> Self {
        Self { time, offset }
    }

    /// The time-of-day component.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// The UTC offset.
    pub fn offset(&self) -> Offset {
        self.offset
    }
}
