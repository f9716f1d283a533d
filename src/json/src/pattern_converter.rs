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

use crate::converter::{Converter, expect_string};
use crate::error::{Error, short_type_name};
use crate::options::JsonOptions;
use serde_json::Value;
use tempora_types::text::Pattern;

/// A validator run before a value is written. Returning an error rejects the
/// value (e.g. a date in a non-ISO calendar).
pub type Validator<T> = fn(&T) -> Result<(), Error>;

/// The converter for any type fully representable as one formatted string,
/// delegating both directions to a [Pattern].
///
/// Because the text form is a single token, pattern-converted types are also
/// valid as JSON property names.
///
/// # Examples
/// ```
/// # use tempora_json::{JsonOptions, PatternConverter};
/// # use tempora_types::LocalTime;
/// # use tempora_types::text::LocalTimePattern;
/// let converter = PatternConverter::new(LocalTimePattern::extended_iso());
/// let options = JsonOptions::new();
/// let time = LocalTime::from_hms_nano(1, 2, 3, 0).unwrap();
/// use tempora_json::Converter as _;
/// assert_eq!(converter.write_value(&time, &options).unwrap(), serde_json::json!("01:02:03"));
/// ```
pub struct PatternConverter<T, P> {
    pattern: P,
    validator: Option<Validator<T>>,
}

impl<T, P: Pattern<T>> PatternConverter<T, P> {
    /// Creates a converter with no write-side validation.
    pub fn new(pattern: P) -> Self {
        Self {
            pattern,
            validator: None,
        }
    }

    /// Creates a converter that runs `validator` before each write.
    pub fn with_validator(pattern: P, validator: Validator<T>) -> Self {
        Self {
            pattern,
            validator: Some(validator),
        }
    }

    fn validate(&self, value: &T) -> Result<(), Error> {
        match self.validator {
            Some(validator) => validator(value),
            None => Ok(()),
        }
    }
}

impl<T, P: Pattern<T>> Converter<T> for PatternConverter<T, P> {
    fn read_value(&self, json: &Value, _options: &JsonOptions) -> Result<T, Error> {
        let text = expect_string(json, short_type_name::<T>())?;
        Ok(self.pattern.parse(text)?)
    }

    fn write_value(&self, value: &T, _options: &JsonOptions) -> Result<Value, Error> {
        self.validate(value)?;
        Ok(Value::String(self.pattern.format(value)))
    }

    fn read_key(&self, key: &str, _options: &JsonOptions) -> Result<T, Error> {
        Ok(self.pattern.parse(key)?)
    }

    fn write_key(&self, value: &T, _options: &JsonOptions) -> Result<String, Error> {
        self.validate(value)?;
        Ok(self.pattern.format(value))
    }
}
