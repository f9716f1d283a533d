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

//! Conversions between the well-known types and their [prost_types]
//! counterparts.
//!
//! Prost's structs carry no invariants, so the incoming direction validates
//! through the regular constructors and rejects out-of-range field values
//! instead of normalizing them.

use crate::duration::{Duration, DurationError};
use crate::timestamp::{Timestamp, TimestampError};

impl TryFrom<prost_types::Duration> for Duration {
    type Error = DurationError;

    fn try_from(value: prost_types::Duration) -> Result<Self, Self::Error> {
        Duration::new(value.seconds, value.nanos)
    }
}

impl From<Duration> for prost_types::Duration {
    fn from(value: Duration) -> Self {
        prost_types::Duration {
            seconds: value.seconds(),
            nanos: value.nanos(),
        }
    }
}

impl TryFrom<prost_types::Timestamp> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: prost_types::Timestamp) -> Result<Self, Self::Error> {
        Timestamp::new(value.seconds, value.nanos)
    }
}

impl From<Timestamp> for prost_types::Timestamp {
    fn from(value: Timestamp) -> Self {
        prost_types::Timestamp {
            seconds: value.seconds(),
            nanos: value.nanos(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn duration_round_trip() -> Result {
        let duration = Duration::new(12, 340_000_000)?;
        let prost = prost_types::Duration::from(duration);
        assert_eq!(prost.seconds, 12);
        assert_eq!(prost.nanos, 340_000_000);
        assert_eq!(Duration::try_from(prost)?, duration);
        Ok(())
    }

    #[test]
    fn duration_validates_incoming_fields() {
        let prost = prost_types::Duration {
            seconds: 1,
            nanos: -1,
        };
        let got = Duration::try_from(prost);
        assert!(matches!(got, Err(DurationError::MismatchedSigns)), "{got:?}");
    }

    #[test]
    fn timestamp_round_trip() -> Result {
        let timestamp = Timestamp::new(1_325_473_445, 123_456_789)?;
        let prost = prost_types::Timestamp::from(timestamp);
        assert_eq!(Timestamp::try_from(prost)?, timestamp);
        Ok(())
    }

    #[test]
    fn timestamp_validates_incoming_fields() {
        let prost = prost_types::Timestamp {
            seconds: Timestamp::MIN_SECONDS - 1,
            nanos: 0,
        };
        let got = Timestamp::try_from(prost);
        assert!(matches!(got, Err(TimestampError::OutOfRange)), "{got:?}");
    }
}
