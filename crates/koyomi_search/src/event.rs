//! Uniform output record for every event family.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use koyomi_time::{Instant, TimeBridge, ZonedInstant, format_label};

use crate::error::SearchError;

/// One calendar event: identifier, instant, zoned label and optional name.
///
/// Immutable once built. The zoned date-time and label are fixed at
/// construction using the engine's time bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    identifier: String,
    instant: Instant,
    zoned: ZonedInstant,
    label: String,
    name: Option<String>,
}

impl EventRecord {
    /// Build a record, converting `instant` through `bridge`.
    pub fn new(
        identifier: impl Into<String>,
        instant: Instant,
        name: Option<String>,
        bridge: &TimeBridge,
    ) -> Result<Self, SearchError> {
        let zoned = bridge.to_zoned(instant)?;
        Ok(Self {
            identifier: identifier.into(),
            instant,
            label: format_label(&zoned),
            zoned,
            name,
        })
    }

    /// Record named `"{year}{name}"` with event name `name`.
    pub fn named(
        year: i32,
        name: &str,
        instant: Instant,
        bridge: &TimeBridge,
    ) -> Result<Self, SearchError> {
        Self::new(format!("{year}{name}"), instant, Some(name.to_string()), bridge)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    pub fn zoned(&self) -> &ZonedInstant {
        &self.zoned
    }

    /// `YYYY/MM/DD HH:MM:SS` in the engine's zone.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Local calendar date.
    pub fn date(&self) -> NaiveDate {
        self.zoned.date_naive()
    }

    /// Local calendar year.
    pub fn year(&self) -> i32 {
        self.zoned.year()
    }
}

impl Display for EventRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.identifier, self.label)
    }
}

/// Sort records by instant, then identifier.
pub fn sort_chronologically(records: &mut [EventRecord]) {
    records.sort_by(|a, b| {
        a.instant
            .total_cmp(&b.instant)
            .then_with(|| a.identifier.cmp(&b.identifier))
    });
}
