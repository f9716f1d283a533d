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
use crate::converters;
use crate::options::ConverterSlot;
use tempora_types::{
    AnnualDate, DateInterval, Duration, Instant, Interval, LocalDate, LocalDateTime, LocalTime,
    Offset, OffsetDate, OffsetDateTime, OffsetTime, Period, TimeZone, ZoneProvider, ZonedDateTime,
};

/// The converter chosen for each supported value type, used to configure a
/// [JsonOptions][crate::JsonOptions] in one step.
///
/// A freshly created instance holds the defaults from
/// [converters][crate::converters]; set a slot to override one type's
/// representation, or to `None` to leave that type unregistered. The bag is
/// plain setup state: it is not thread-safe, and
/// [configure_with][crate::JsonOptions::configure_with] consumes it.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # use tempora_json::{JsonOptions, JsonSettings, converters};
/// # use tempora_types::FixedZoneProvider;
/// let mut settings = JsonSettings::new(Arc::new(FixedZoneProvider::new(["Etc/UTC"])));
/// settings.duration_converter = Some(converters::roundtrip_duration_converter());
/// settings.period_converter = None; // periods stay unregistered
/// let options = JsonOptions::new().configure_with(settings);
/// ```
#[derive(Clone)]
#[non_exhaustive]
pub struct JsonSettings {
    /// The converter used for [Instant] values.
    pub instant_converter: Option<Arc<dyn Converter<Instant>>>,
    /// The converter used for [Interval] values.
    pub interval_converter: Option<Arc<dyn Converter<Interval>>>,
    /// The converter used for [LocalDate] values.
    pub local_date_converter: Option<Arc<dyn Converter<LocalDate>>>,
    /// The converter used for [LocalDateTime] values.
    pub local_date_time_converter: Option<Arc<dyn Converter<LocalDateTime>>>,
    /// The converter used for [LocalTime] values.
    pub local_time_converter: Option<Arc<dyn Converter<LocalTime>>>,
    /// The converter used for [AnnualDate] values.
    pub annual_date_converter: Option<Arc<dyn Converter<AnnualDate>>>,
    /// The converter used for [DateInterval] values.
    pub date_interval_converter: Option<Arc<dyn Converter<DateInterval>>>,
    /// The converter used for [Offset] values.
    pub offset_converter: Option<Arc<dyn Converter<Offset>>>,
    /// The converter used for [TimeZone] values.
    pub time_zone_converter: Option<Arc<dyn Converter<TimeZone>>>,
    /// The converter used for [Duration] values.
    pub duration_converter: Option<Arc<dyn Converter<Duration>>>,
    /// The converter used for [Period] values.
    pub period_converter: Option<Arc<dyn Converter<Period>>>,
    /// The converter used for [OffsetDateTime] values.
    pub offset_date_time_converter: Option<Arc<dyn Converter<OffsetDateTime>>>,
    /// The converter used for [OffsetDate] values.
    pub offset_date_converter: Option<Arc<dyn Converter<OffsetDate>>>,
    /// The converter used for [OffsetTime] values.
    pub offset_time_converter: Option<Arc<dyn Converter<OffsetTime>>>,
    /// The converter used for [ZonedDateTime] values.
    pub zoned_date_time_converter: Option<Arc<dyn Converter<ZonedDateTime>>>,
}

impl JsonSettings {
    /// Creates settings with the default converter in every slot, resolving
    /// time zones through `provider`.
    pub fn new(provider: Arc<dyn ZoneProvider>) -> Self {
        Self {
            instant_converter: Some(converters::instant_converter()),
            interval_converter: Some(converters::interval_converter()),
            local_date_converter: Some(converters::local_date_converter()),
            local_date_time_converter: Some(converters::local_date_time_converter()),
            local_time_converter: Some(converters::local_time_converter()),
            annual_date_converter: Some(converters::annual_date_converter()),
            date_interval_converter: Some(converters::date_interval_converter()),
            offset_converter: Some(converters::offset_converter()),
            time_zone_converter: Some(converters::time_zone_converter(provider.clone())),
            duration_converter: Some(converters::duration_converter()),
            period_converter: Some(converters::roundtrip_period_converter()),
            offset_date_time_converter: Some(converters::offset_date_time_converter()),
            offset_date_converter: Some(converters::offset_date_converter()),
            offset_time_converter: Some(converters::offset_time_converter()),
            zoned_date_time_converter: Some(converters::zoned_date_time_converter(provider)),
        }
    }

    /// Appends each populated slot in the canonical registration order.
    pub(crate) fn add_to(self, converters: &mut Vec<ConverterSlot>) {
        fn push<T>(
            converters: &mut Vec<ConverterSlot>,
            slot: Option<Arc<dyn Converter<T>>>,
            wrap: fn(Arc<dyn Converter<T>>) -> ConverterSlot,
        ) {
            if let Some(converter) = slot {
                converters.push(wrap(converter));
            }
        }
        push(converters, self.instant_converter, ConverterSlot::Instant);
        push(converters, self.interval_converter, ConverterSlot::Interval);
        push(converters, self.local_date_converter, ConverterSlot::LocalDate);
        push(
            converters,
            self.local_date_time_converter,
            ConverterSlot::LocalDateTime,
        );
        push(converters, self.local_time_converter, ConverterSlot::LocalTime);
        push(converters, self.annual_date_converter, ConverterSlot::AnnualDate);
        push(
            converters,
            self.date_interval_converter,
            ConverterSlot::DateInterval,
        );
        push(converters, self.offset_converter, ConverterSlot::Offset);
        push(converters, self.time_zone_converter, ConverterSlot::TimeZone);
        push(converters, self.duration_converter, ConverterSlot::Duration);
        push(converters, self.period_converter, ConverterSlot::Period);
        push(
            converters,
            self.offset_date_time_converter,
            ConverterSlot::OffsetDateTime,
        );
        push(converters, self.offset_date_converter, ConverterSlot::OffsetDate);
        push(converters, self.offset_time_converter, ConverterSlot::OffsetTime);
        push(
            converters,
            self.zoned_date_time_converter,
            ConverterSlot::ZonedDateTime,
        );
    }
}
