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

//! Preconfigured converters for every supported value type.
//!
//! These are the converters [JsonSettings][crate::JsonSettings] registers by
//! default, plus the alternates: the ISO-8601 string forms for the interval
//! types and the day-splitting round-trip duration form. Converters taking a
//! provider are factories; the rest are stateless and every call returns an
//! equivalent instance.

use std::sync::Arc;

use crate::annual_date::AnnualDateConverter;
use crate::converter::Converter;
use crate::date_interval::DateIntervalConverter;
use crate::error::Error;
use crate::interval::IntervalConverter;
use crate::iso_interval::{IsoDateIntervalConverter, IsoIntervalConverter};
use crate::pattern_converter::PatternConverter;
use crate::time_zone::TimeZoneConverter;
use tempora_types::text::{
    DurationPattern, InstantPattern, LocalDatePattern, LocalDateTimePattern, LocalTimePattern,
    OffsetDatePattern, OffsetDateTimePattern, OffsetPattern, OffsetTimePattern, PeriodPattern,
    ZonedDateTimePattern,
};
use tempora_types::{
    AnnualDate, CalendarSystem, DateInterval, Duration, Instant, Interval, LocalDate,
    LocalDateTime, LocalTime, Offset, OffsetDate, OffsetDateTime, OffsetTime, Period, TimeZone,
    ZoneProvider, ZonedDateTime,
};

fn iso_calendar_local_date(value: &LocalDate) -> Result<(), Error> {
    require_iso("LocalDate", value.calendar())
}

fn iso_calendar_local_date_time(value: &LocalDateTime) -> Result<(), Error> {
    require_iso("LocalDateTime", value.calendar())
}

fn iso_calendar_offset_date_time(value: &OffsetDateTime) -> Result<(), Error> {
    require_iso("OffsetDateTime", value.calendar())
}

fn iso_calendar_offset_date(value: &OffsetDate) -> Result<(), Error> {
    require_iso("OffsetDate", value.calendar())
}

fn iso_calendar_zoned_date_time(value: &ZonedDateTime) -> Result<(), Error> {
    require_iso("ZonedDateTime", value.calendar())
}

fn require_iso(type_name: &'static str, calendar: CalendarSystem) -> Result<(), Error> {
    if calendar == CalendarSystem::Iso {
        Ok(())
    } else {
        Err(Error::NonIsoCalendar {
            type_name,
            calendar: calendar.id(),
        })
    }
}

/// Instants as extended ISO-8601 strings with a `Z` designator, e.g.
/// `2012-01-02T03:04:05.123456789Z`.
pub fn instant_converter() -> Arc<dyn Converter<Instant>> {
    Arc::new(PatternConverter::new(InstantPattern::extended_iso()))
}

/// Intervals as `{"Start": ..., "End": ...}` objects, delegating each end to
/// the registered [Instant] converter. This is the default interval form.
pub fn interval_converter() -> Arc<dyn Converter<Interval>> {
    Arc::new(IntervalConverter)
}

/// Intervals as `"<start>/<end>"` ISO-8601 strings.
pub fn iso_interval_converter() -> Arc<dyn Converter<Interval>> {
    Arc::new(IsoIntervalConverter)
}

/// Dates as `uuuu-MM-dd` strings; non-ISO calendars are rejected on write.
pub fn local_date_converter() -> Arc<dyn Converter<LocalDate>> {
    Arc::new(PatternConverter::with_validator(
        LocalDatePattern::iso(),
        iso_calendar_local_date,
    ))
}

/// Date-times as extended ISO-8601 strings without an offset designator;
/// non-ISO calendars are rejected on write.
pub fn local_date_time_converter() -> Arc<dyn Converter<LocalDateTime>> {
    Arc::new(PatternConverter::with_validator(
        LocalDateTimePattern::extended_iso(),
        iso_calendar_local_date_time,
    ))
}

/// Times of day as `HH:mm:ss` strings with fractional seconds as needed.
pub fn local_time_converter() -> Arc<dyn Converter<LocalTime>> {
    Arc::new(PatternConverter::new(LocalTimePattern::extended_iso()))
}

/// Annual dates as `{"Month": ..., "Day": ...}` objects.
pub fn annual_date_converter() -> Arc<dyn Converter<AnnualDate>> {
    Arc::new(AnnualDateConverter)
}

/// Date intervals as `{"Start": ..., "End": ...}` objects, delegating each
/// end to the registered [LocalDate] converter. This is the default form.
pub fn date_interval_converter() -> Arc<dyn Converter<DateInterval>> {
    Arc::new(DateIntervalConverter)
}

/// Date intervals as `"<start>/<end>"` ISO-8601 strings.
pub fn iso_date_interval_converter() -> Arc<dyn Converter<DateInterval>> {
    Arc::new(IsoDateIntervalConverter)
}

/// Offsets in the general form: `Z`, `+05`, `+05:30`, or `+05:30:45`.
pub fn offset_converter() -> Arc<dyn Converter<Offset>> {
    Arc::new(PatternConverter::new(OffsetPattern::general()))
}

/// Time zones as their id strings, resolved through `provider` on read.
pub fn time_zone_converter(provider: Arc<dyn ZoneProvider>) -> Arc<dyn Converter<TimeZone>> {
    Arc::new(TimeZoneConverter::new(provider))
}

/// Durations as `-H:mm:ss` strings with fractional seconds as needed and an
/// unbounded hour field.
pub fn duration_converter() -> Arc<dyn Converter<Duration>> {
    Arc::new(PatternConverter::new(DurationPattern::hours_minutes_seconds()))
}

/// Durations as `-D:hh:mm:ss` strings, splitting whole days out of the hour
/// field.
pub fn roundtrip_duration_converter() -> Arc<dyn Converter<Duration>> {
    Arc::new(PatternConverter::new(DurationPattern::roundtrip()))
}

/// Periods in the round-trip form, preserving every component exactly.
pub fn roundtrip_period_converter() -> Arc<dyn Converter<Period>> {
    Arc::new(PatternConverter::new(PeriodPattern::roundtrip()))
}

/// Offset date-times in the RFC 3339 form; non-ISO calendars are rejected on
/// write.
pub fn offset_date_time_converter() -> Arc<dyn Converter<OffsetDateTime>> {
    Arc::new(PatternConverter::with_validator(
        OffsetDateTimePattern::rfc3339(),
        iso_calendar_offset_date_time,
    ))
}

/// Offset dates as `uuuu-MM-dd` plus a general offset; non-ISO calendars are
/// rejected on write.
pub fn offset_date_converter() -> Arc<dyn Converter<OffsetDate>> {
    Arc::new(PatternConverter::with_validator(
        OffsetDatePattern::general_iso(),
        iso_calendar_offset_date,
    ))
}

/// Offset times as `HH:mm:ss` plus a general offset.
pub fn offset_time_converter() -> Arc<dyn Converter<OffsetTime>> {
    Arc::new(PatternConverter::new(OffsetTimePattern::extended_iso()))
}

/// Zoned date-times as `<local><offset> <zone-id>` strings, resolving the
/// zone through `provider` on read; non-ISO calendars are rejected on write.
pub fn zoned_date_time_converter(
    provider: Arc<dyn ZoneProvider>,
) -> Arc<dyn Converter<ZonedDateTime>> {
    Arc::new(PatternConverter::with_validator(
        ZonedDateTimePattern::with_provider(provider),
        iso_calendar_zoned_date_time,
    ))
}
