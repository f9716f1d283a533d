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

//! Bidirectional text patterns for the Tempora value types.
//!
//! A [Pattern] pairs a parser with a formatter for one value type. Formatting
//! is total over the type's domain; parsing reports malformed text and
//! out-of-range components through [ParseError]. Patterns hold no mutable
//! state and can be shared freely between threads.

mod fields;

mod date;
pub use self::date::*;
mod date_time;
pub use self::date_time::*;
mod duration;
pub use self::duration::*;
mod instant;
pub use self::instant::*;
mod offset;
pub use self::offset::*;
mod period;
pub use self::period::*;
mod time;
pub use self::time::*;
mod zoned;
pub use self::zoned::*;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// A bidirectional mapping between one value type and its canonical text.
pub trait Pattern<T>: Send + Sync {
    /// Parses `text` into a value.
    fn parse(&self, text: &str) -> Result<T, ParseError>;

    /// Formats `value` as text. Formatting never fails for values the type
    /// itself admits.
    fn format(&self, value: &T) -> String;
}

/// Represents failures in parsing text into a temporal value.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// The text does not have the shape the pattern expects.
    #[error("cannot parse {text:?} as {kind}: {problem}")]
    Mismatch {
        /// The value type being parsed.
        kind: &'static str,
        /// The offending input.
        text: String,
        /// What was wrong with it.
        problem: &'static str,
    },

    /// A numeric component was outside its valid range.
    #[error("{component} out of range parsing {kind}: {value}")]
    OutOfRange {
        /// The value type being parsed.
        kind: &'static str,
        /// The component that was out of range.
        component: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The components were individually plausible but do not form a valid
    /// value (e.g. February 30).
    #[error("cannot parse {text:?} as {kind}")]
    Invalid {
        /// The value type being parsed.
        kind: &'static str,
        /// The offending input.
        text: String,
        /// The underlying constructor failure.
        #[source]
        source: BoxedError,
    },

    /// A zone id in the text was not recognized by the configured provider.
    #[error(transparent)]
    ZoneNotFound(#[from] crate::ZoneNotFound),
}

impl ParseError {
    pub(crate) fn mismatch(kind: &'static str, text: &str, problem: &'static str) -> Self {
        ParseError::Mismatch {
            kind,
            text: text.to_string(),
            problem,
        }
    }

    pub(crate) fn invalid(
        kind: &'static str,
        text: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ParseError::Invalid {
            kind,
            text: text.to_string(),
            source: Box::new(source),
        }
    }
}
