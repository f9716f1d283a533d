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

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Represents failures in converting temporal values to or from JSON.
///
/// Read-side converter failures, whatever their concrete cause, are wrapped
/// in [Conversion][Error::Conversion] so callers have one outer error per
/// failed value; the original failure stays reachable through
/// [std::error::Error::source]. Write-side failures (validator rejections,
/// unregistered types) are reported directly.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The uniform wrapper for read-side converter failures.
    #[error("cannot convert value to {type_name}")]
    Conversion {
        /// The target value type.
        type_name: &'static str,
        /// The underlying failure.
        #[source]
        source: BoxedError,
    },

    /// A JSON null (or empty string) in a position whose target type is not
    /// nullable.
    #[error("cannot convert a null value to {0}")]
    UnexpectedNull(&'static str),

    /// The JSON token kind does not match what the converter expects.
    #[error("unexpected JSON token parsing {type_name}: expected {expected}, got {got}")]
    UnexpectedToken {
        /// The target value type.
        type_name: &'static str,
        /// The token kind the converter needed.
        expected: &'static str,
        /// The token kind that was present.
        got: &'static str,
    },

    /// The JSON structure was malformed or semantically invalid for the
    /// target type, e.g. a required field was missing.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A value in a non-ISO calendar cannot be serialized.
    #[error("values of type {type_name} must use the ISO calendar to be serialized; actual calendar: {calendar}")]
    NonIsoCalendar {
        /// The rejected value type.
        type_name: &'static str,
        /// The id of the calendar the value actually uses.
        calendar: &'static str,
    },

    /// The type has no single-token text form and cannot appear in JSON
    /// property-name position.
    #[error("values of type {0} cannot be used as JSON property names")]
    InvalidPropertyName(&'static str),

    /// No converter for the type is registered in the options.
    #[error("no converter is registered for {0}")]
    NotRegistered(&'static str),

    /// A text pattern rejected the input.
    #[error(transparent)]
    Parse(#[from] tempora_types::text::ParseError),

    /// A zone id was not recognized by the configured provider.
    #[error(transparent)]
    ZoneNotFound(#[from] tempora_types::ZoneNotFound),
}

impl Error {
    pub(crate) fn conversion<T, E: Into<BoxedError>>(source: E) -> Self {
        Error::Conversion {
            type_name: short_type_name::<T>(),
            source: source.into(),
        }
    }
}

/// The unqualified name of `T`, for error messages.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
