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

//! Shared field-level formatting and scanning helpers for the patterns.

use super::ParseError;
use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::offset::Offset;

/// Appends `.fffffffff` with trailing zeros trimmed; appends nothing for a
/// zero fraction.
pub(super) fn push_fraction(out: &mut String, nanos: u32) {
    if nanos == 0 {
        return;
    }
    let digits = format!("{nanos:09}");
    out.push('.');
    out.push_str(digits.trim_end_matches('0'));
}

/// Parses 1 to 9 fractional-second digits, right-padded to nanoseconds.
pub(super) fn parse_fraction(kind: &'static str, text: &str) -> Result<u32, ParseError> {
    if text.is_empty() || text.len() > 9 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::mismatch(
            kind,
            text,
            "expected 1 to 9 fractional-second digits",
        ));
    }
    let mut value = 0u32;
    for b in text.bytes() {
        value = value * 10 + (b - b'0') as u32;
    }
    Ok(value * 10u32.pow(9 - text.len() as u32))
}

/// Parses a run of ASCII digits into a u64. `None` for empty, non-digit, or
/// overflowing input.
pub(super) fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut value = 0u64;
    for b in text.bytes() {
        value = value.checked_mul(10)?.checked_add((b - b'0') as u64)?;
    }
    Some(value)
}

/// Parses exactly `len` ASCII digits.
pub(super) fn fixed_digits(text: &str, len: usize) -> Option<u32> {
    if text.len() != len {
        return None;
    }
    parse_digits(text).map(|v| v as u32)
}

/// Parses exactly two ASCII digits.
pub(super) fn two_digits(text: &str) -> Option<u32> {
    fixed_digits(text, 2)
}

/// Appends an offset: `Z` for zero, otherwise `±HH` extended with `:mm` and
/// `:ss` as needed. With `always_minutes` the minutes are written even when
/// zero (the RFC 3339 form).
pub(super) fn push_offset(out: &mut String, offset: &Offset, always_minutes: bool) {
    let seconds = offset.seconds();
    if seconds == 0 {
        out.push('Z');
        return;
    }
    out.push(if seconds < 0 { '-' } else { '+' });
    let magnitude = seconds.unsigned_abs();
    let (h, m, s) = (magnitude / 3600, magnitude / 60 % 60, magnitude % 60);
    out.push_str(&format!("{h:02}"));
    if always_minutes || m != 0 || s != 0 {
        out.push_str(&format!(":{m:02}"));
    }
    if s != 0 {
        out.push_str(&format!(":{s:02}"));
    }
}

/// Parses a whole string as an offset: `Z`, `±HH`, `±HH:mm`, or `±HH:mm:ss`.
pub(super) fn parse_offset(kind: &'static str, text: &str) -> Result<Offset, ParseError> {
    if text == "Z" || text == "z" {
        return Ok(Offset::ZERO);
    }
    let (sign, body) = match text.as_bytes().first() {
        Some(b'+') => (1, &text[1..]),
        Some(b'-') => (-1, &text[1..]),
        _ => {
            return Err(ParseError::mismatch(
                kind,
                text,
                "expected a UTC offset (Z or a signed hour field)",
            ));
        }
    };
    let mut parts = body.split(':');
    let hours = parts
        .next()
        .and_then(two_digits)
        .ok_or_else(|| ParseError::mismatch(kind, text, "expected a two-digit offset hour"))?;
    let minutes = match parts.next() {
        None => 0,
        Some(p) => two_digits(p)
            .ok_or_else(|| ParseError::mismatch(kind, text, "expected two-digit offset minutes"))?,
    };
    let seconds = match parts.next() {
        None => 0,
        Some(p) => two_digits(p)
            .ok_or_else(|| ParseError::mismatch(kind, text, "expected two-digit offset seconds"))?,
    };
    if parts.next().is_some() {
        return Err(ParseError::mismatch(kind, text, "trailing offset fields"));
    }
    if minutes >= 60 {
        return Err(ParseError::OutOfRange {
            kind,
            component: "offset minutes",
            value: minutes as i64,
        });
    }
    if seconds >= 60 {
        return Err(ParseError::OutOfRange {
            kind,
            component: "offset seconds",
            value: seconds as i64,
        });
    }
    let total = (hours as i64 * SECONDS_PER_HOUR + minutes as i64 * SECONDS_PER_MINUTE
        + seconds as i64)
        * sign;
    Offset::from_seconds(total as i32).map_err(|_| ParseError::OutOfRange {
        kind,
        component: "offset",
        value: total,
    })
}

/// The byte index where a trailing offset begins (`+`, `-`, `Z`, or `z`),
/// searching from `from`.
pub(super) fn find_offset_start(text: &str, from: usize) -> Option<usize> {
    text.bytes()
        .enumerate()
        .skip(from)
        .find(|(_, b)| matches!(b, b'+' | b'-' | b'Z' | b'z'))
        .map(|(i, _)| i)
}
