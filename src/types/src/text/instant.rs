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

use super::{ParseError, Pattern};
use crate::instant::Instant;
use time::format_description::well_known::Rfc3339;

const EXPECT_IN_RANGE: &str = concat!(
    "every Instant is within the range representable by time::OffsetDateTime; ",
    "the constructors enforce this"
);
const EXPECT_FORMATS: &str = concat!(
    "formatting an in-range UTC date-time with the RFC 3339 well-known format ",
    "always succeeds"
);

/// The extended ISO-8601 instant pattern: RFC 3339 with a `Z` designator and
/// up to nine fractional-second digits as needed.
///
/// # Examples
/// ```
/// # use tempora_types::text::{InstantPattern, Pattern};
/// let pattern = InstantPattern::extended_iso();
/// let instant = pattern.parse("2012-01-02T03:04:05.123456789Z")?;
/// assert_eq!(pattern.format(&instant), "2012-01-02T03:04:05.123456789Z");
/// # Ok::<(), tempora_types::text::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantPattern;

impl InstantPattern {
    /// The extended ISO pattern instance.
    pub fn extended_iso() -> Self {
        Self
    }
}

impl Pattern<Instant> for InstantPattern {
    fn parse(&self, text: &str) -> Result<Instant, ParseError> {
        let parsed = time::OffsetDateTime::parse(text, &Rfc3339)
            .map_err(|e| ParseError::invalid("Instant", text, e))?;
        Instant::from_unix_nanos(parsed.unix_timestamp_nanos())
            .map_err(|e| ParseError::invalid("Instant", text, e))
    }

    fn format(&self, value: &Instant) -> String {
        time::OffsetDateTime::from_unix_timestamp_nanos(value.unix_nanos())
            .expect(EXPECT_IN_RANGE)
            .format(&Rfc3339)
            .expect(EXPECT_FORMATS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test_case("2012-01-02T03:04:05Z")]
    #[test_case("2012-01-02T03:04:05.67Z")]
    #[test_case("2013-06-07T08:09:10.123456789Z")]
    #[test_case("1970-01-01T00:00:00Z")]
    #[test_case("0001-01-01T00:00:00Z")]
    #[test_case("9999-12-31T23:59:59.999999999Z")]
    fn round_trip(text: &str) -> Result {
        let pattern = InstantPattern::extended_iso();
        let instant = pattern.parse(text)?;
        assert_eq!(pattern.format(&instant), text);
        Ok(())
    }

    #[test]
    fn parse_resolves_explicit_offsets() -> Result {
        let pattern = InstantPattern::extended_iso();
        let via_offset = pattern.parse("2012-01-02T04:04:05+01:00")?;
        let via_utc = pattern.parse("2012-01-02T03:04:05Z")?;
        assert_eq!(via_offset, via_utc);
        Ok(())
    }

    #[test_case("2012-01-02T03:04:05"; "missing designator")]
    #[test_case("2012-01-02"; "date only")]
    #[test_case("not an instant")]
    fn rejects_malformed(text: &str) {
        let got = InstantPattern::extended_iso().parse(text);
        assert!(matches!(got, Err(ParseError::Invalid { .. })), "{got:?}");
    }
}
