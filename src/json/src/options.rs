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

use std::sync::Arc;

use crate::converter::Converter;
use crate::error::{Error, short_type_name};
use crate::settings::JsonSettings;
use serde_json::Value;
use tempora_types::{
    AnnualDate, DateInterval, Duration, Instant, Interval, LocalDate, LocalDateTime, LocalTime,
    Offset, OffsetDate, OffsetDateTime, OffsetTime, Period, TimeZone, ZoneProvider, ZonedDateTime,
};

/// How declared property names map to JSON property names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum NamingPolicy {
    /// Property names are used as declared (`Start`, `End`, `Month`, `Day`).
    #[default]
    Preserve,
    /// Property names are written with a lowercase first letter.
    CamelCase,
}

impl NamingPolicy {
    /// The JSON name for a declared property name under this policy.
    pub fn resolve(&self, name: &str) -> String {
        match self {
            NamingPolicy::Preserve => name.to_string(),
            NamingPolicy::CamelCase => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// One registered converter. The set of supported value types is closed, so
/// the registry is an enum list rather than a type-keyed map.
#[derive(Clone)]
pub(crate) enum ConverterSlot {
    Instant(Arc<dyn Converter<Instant>>),
    Interval(Arc<dyn Converter<Interval>>),
    LocalDate(Arc<dyn Converter<LocalDate>>),
    LocalDateTime(Arc<dyn Converter<LocalDateTime>>),
    LocalTime(Arc<dyn Converter<LocalTime>>),
    AnnualDate(Arc<dyn Converter<AnnualDate>>),
    DateInterval(Arc<dyn Converter<DateInterval>>),
    Offset(Arc<dyn Converter<Offset>>),
    TimeZone(Arc<dyn Converter<TimeZone>>),
    Duration(Arc<dyn Converter<Duration>>),
    Period(Arc<dyn Converter<Period>>),
    OffsetDateTime(Arc<dyn Converter<OffsetDateTime>>),
    OffsetDate(Arc<dyn Converter<OffsetDate>>),
    OffsetTime(Arc<dyn Converter<OffsetTime>>),
    ZonedDateTime(Arc<dyn Converter<ZonedDateTime>>),
}

mod sealed {
    use super::{Converter, ConverterSlot, JsonOptions};
    use std::sync::Arc;

    pub trait Sealed: Sized {
        fn find(options: &JsonOptions) -> Option<&dyn Converter<Self>>;
        fn slot(converter: Arc<dyn Converter<Self>>) -> ConverterSlot;
        fn matches(slot: &ConverterSlot) -> bool;
    }
}

/// The closed set of types convertible through [JsonOptions].
///
/// This trait is sealed; the supported types are exactly the Tempora value
/// types.
pub trait JsonTemporal: sealed::Sealed {}

macro_rules! impl_json_temporal {
    ($type:ty, $variant:ident) => {
        impl sealed::Sealed for $type {
            fn find(options: &JsonOptions) -> Option<&dyn Converter<Self>> {
                options.converters.iter().find_map(|slot| match slot {
                    ConverterSlot::$variant(converter) => Some(converter.as_ref()),
                    _ => None,
                })
            }

            fn slot(converter: Arc<dyn Converter<Self>>) -> ConverterSlot {
                ConverterSlot::$variant(converter)
            }

            fn matches(slot: &ConverterSlot) -> bool {
                matches!(slot, ConverterSlot::$variant(_))
            }
        }

        impl JsonTemporal for $type {}
    };
}

impl_json_temporal!(Instant, Instant);
impl_json_temporal!(Interval, Interval);
impl_json_temporal!(LocalDate, LocalDate);
impl_json_temporal!(LocalDateTime, LocalDateTime);
impl_json_temporal!(LocalTime, LocalTime);
impl_json_temporal!(AnnualDate, AnnualDate);
impl_json_temporal!(DateInterval, DateInterval);
impl_json_temporal!(Offset, Offset);
impl_json_temporal!(TimeZone, TimeZone);
impl_json_temporal!(Duration, Duration);
impl_json_temporal!(Period, Period);
impl_json_temporal!(OffsetDateTime, OffsetDateTime);
impl_json_temporal!(OffsetDate, OffsetDate);
impl_json_temporal!(OffsetTime, OffsetTime);
impl_json_temporal!(ZonedDateTime, ZonedDateTime);

/// The configuration a conversion runs under: the registered converters plus
/// the property-naming rules.
///
/// Options are built once, single-threaded, and are immutable afterwards;
/// the built value is safe to share across threads. Converter lookup finds
/// the first registered converter for the requested type, and
/// [with_converter][JsonOptions::with_converter] removes every existing
/// converter for the type before appending the replacement, so replacing is
/// idempotent.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # use tempora_json::{JsonOptions, NamingPolicy};
/// # use tempora_types::FixedZoneProvider;
/// let provider = Arc::new(FixedZoneProvider::new(["Etc/UTC"]));
/// let options = JsonOptions::new()
///     .with_naming_policy(NamingPolicy::CamelCase)
///     .configure_for_temporal(provider)
///     .with_iso_interval_converter();
/// ```
#[derive(Clone, Default)]
pub struct JsonOptions {
    naming_policy: NamingPolicy,
    case_insensitive_properties: bool,
    converters: Vec<ConverterSlot>,
}

impl JsonOptions {
    /// Creates options with no converters, the preserving naming policy, and
    /// case-sensitive property matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the default converter for every supported type, resolving
    /// time zones through `provider`.
    pub fn configure_for_temporal(self, provider: Arc<dyn ZoneProvider>) -> Self {
        self.configure_with(JsonSettings::new(provider))
    }

    /// Appends each populated slot of `settings`, consuming it. Slots set to
    /// `None` leave their type unregistered.
    pub fn configure_with(mut self, settings: JsonSettings) -> Self {
        settings.add_to(&mut self.converters);
        self
    }

    /// Replaces the converter registered for `T`.
    ///
    /// Every registered converter for `T` is removed first, so applying the
    /// same replacement twice leaves a single registration.
    pub fn with_converter<T: JsonTemporal>(mut self, converter: Arc<dyn Converter<T>>) -> Self {
        self.converters.retain(|slot| !T::matches(slot));
        self.converters.push(T::slot(converter));
        self
    }

    /// Switches [Interval][tempora_types::Interval] values to the ISO-8601
    /// `"start/end"` string form.
    pub fn with_iso_interval_converter(self) -> Self {
        self.with_converter(crate::converters::iso_interval_converter())
    }

    /// Switches [DateInterval][tempora_types::DateInterval] values to the
    /// ISO-8601 `"start/end"` string form.
    pub fn with_iso_date_interval_converter(self) -> Self {
        self.with_converter(crate::converters::iso_date_interval_converter())
    }

    /// Sets the property naming policy.
    pub fn with_naming_policy(mut self, policy: NamingPolicy) -> Self {
        self.naming_policy = policy;
        self
    }

    /// Sets whether property names match case-insensitively on read.
    pub fn with_case_insensitive_properties(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive_properties = case_insensitive;
        self
    }

    /// The property naming policy.
    pub fn naming_policy(&self) -> NamingPolicy {
        self.naming_policy
    }

    /// Whether property names match case-insensitively on read.
    pub fn case_insensitive_properties(&self) -> bool {
        self.case_insensitive_properties
    }

    /// The JSON property name for a declared name under the naming policy.
    pub fn resolve_property_name(&self, name: &str) -> String {
        self.naming_policy.resolve(name)
    }

    /// Whether a property name read from JSON refers to `resolved`.
    pub fn property_names_match(&self, from_json: &str, resolved: &str) -> bool {
        if self.case_insensitive_properties {
            from_json.eq_ignore_ascii_case(resolved)
        } else {
            from_json == resolved
        }
    }

    /// Converts `value` to JSON with the registered converter.
    pub fn serialize<T: JsonTemporal>(&self, value: &T) -> Result<Value, Error> {
        self.converter_for::<T>()?.write_value(value, self)
    }

    /// Converts an optional value to JSON; an absent value becomes JSON
    /// null.
    pub fn serialize_optional<T: JsonTemporal>(&self, value: &Option<T>) -> Result<Value, Error> {
        match value {
            None => Ok(Value::Null),
            Some(value) => self.serialize(value),
        }
    }

    /// Converts `value` to a JSON property name with the registered
    /// converter. Fails for types without a single-token text form.
    pub fn serialize_key<T: JsonTemporal>(&self, value: &T) -> Result<String, Error> {
        self.converter_for::<T>()?.write_key(value, self)
    }

    /// Converts JSON into `T` with the registered converter.
    ///
    /// JSON null and the empty string both denote an absent value and are
    /// rejected here; use
    /// [deserialize_optional][JsonOptions::deserialize_optional] for targets
    /// that accept absence. Converter failures are wrapped in
    /// [Error::Conversion] with the original failure as source.
    pub fn deserialize<T: JsonTemporal>(&self, json: &Value) -> Result<T, Error> {
        let converter = self.converter_for::<T>()?;
        if is_absent(json) {
            return Err(Error::UnexpectedNull(short_type_name::<T>()));
        }
        converter
            .read_value(json, self)
            .map_err(|e| Error::conversion::<T, _>(e))
    }

    /// Converts JSON into `T`, mapping JSON null and the empty string to
    /// `None`.
    pub fn deserialize_optional<T: JsonTemporal>(&self, json: &Value) -> Result<Option<T>, Error> {
        if is_absent(json) {
            return Ok(None);
        }
        self.deserialize(json).map(Some)
    }

    /// Converts a JSON property name into `T` with the registered converter.
    pub fn deserialize_key<T: JsonTemporal>(&self, key: &str) -> Result<T, Error> {
        self.converter_for::<T>()?
            .read_key(key, self)
            .map_err(|e| Error::conversion::<T, _>(e))
    }

    fn converter_for<T: JsonTemporal>(&self) -> Result<&dyn Converter<T>, Error> {
        T::find(self).ok_or(Error::NotRegistered(short_type_name::<T>()))
    }
}

impl std::fmt::Debug for JsonOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonOptions")
            .field("naming_policy", &self.naming_policy)
            .field("case_insensitive_properties", &self.case_insensitive_properties)
            .field("converters", &self.converters.len())
            .finish()
    }
}

/// Whether a JSON value marks an explicit absence: null, or the empty
/// string. The empty string is deliberate: it lets optional textual fields
/// round-trip through formats that cannot omit them.
fn is_absent(json: &Value) -> bool {
    match json {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}
