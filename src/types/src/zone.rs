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

use std::collections::BTreeSet;
use std::sync::Arc;

/// A time zone, identified by its IANA-style id.
///
/// This type intentionally carries no offset rules: computing the offset at a
/// given instant requires a time zone database, which lives behind a
/// [ZoneProvider]. For serialization, the id is the whole story: zones are
/// written as their ids and read back by resolving the id through a provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeZone {
    id: Arc<str>,
}

impl TimeZone {
    /// Creates a zone with the given id. No validation is performed; use a
    /// [ZoneProvider] to resolve ids against a known set.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self { id: id.into() }
    }

    /// The id of this zone, e.g. `America/Los_Angeles`.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// The error for zone-id lookups that the provider does not recognize.
#[derive(thiserror::Error, Debug)]
#[error("time zone id {id:?} is not known to the provider")]
pub struct ZoneNotFound {
    id: String,
}

impl ZoneNotFound {
    /// Creates the error for the given id. Exposed so custom [ZoneProvider]
    /// implementations can report failures uniformly.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The id that failed to resolve.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Resolves zone ids to [TimeZone] values.
///
/// Implementations are read-only lookup tables and must be safe to query
/// concurrently.
pub trait ZoneProvider: Send + Sync {
    /// Returns the zone for `id`, or [ZoneNotFound] if the provider does not
    /// recognize it.
    fn zone(&self, id: &str) -> Result<TimeZone, ZoneNotFound>;
}

/// A [ZoneProvider] over a fixed, in-memory set of zone ids.
///
/// Useful in tests and in embedders that know the closed set of zones their
/// data can reference. A production system would instead wrap a real time
/// zone database here.
///
/// # Examples
/// ```
/// # use tempora_types::{FixedZoneProvider, ZoneProvider};
/// let provider = FixedZoneProvider::new(["Europe/London", "America/New_York"]);
/// assert_eq!(provider.zone("Europe/London").unwrap().id(), "Europe/London");
/// assert!(provider.zone("Nowhere/Special").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FixedZoneProvider {
    ids: BTreeSet<String>,
}

impl FixedZoneProvider {
    /// Creates a provider recognizing exactly the given ids.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl ZoneProvider for FixedZoneProvider {
    fn zone(&self, id: &str) -> Result<TimeZone, ZoneNotFound> {
        if self.ids.contains(id) {
            Ok(TimeZone::new(id))
        } else {
            Err(ZoneNotFound::new(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_equality_is_by_id() {
        assert_eq!(TimeZone::new("Europe/Paris"), TimeZone::new("Europe/Paris"));
        assert_ne!(TimeZone::new("Europe/Paris"), TimeZone::new("Europe/Rome"));
    }

    #[test]
    fn fixed_provider_lookup() {
        let provider = FixedZoneProvider::new(["Etc/UTC"]);
        assert!(provider.zone("Etc/UTC").is_ok());
        let err = provider.zone("Etc/GMT+1").unwrap_err();
        assert_eq!(err.id(), "Etc/GMT+1");
        assert!(err.to_string().contains("Etc/GMT+1"));
    }
}
