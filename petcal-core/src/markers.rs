//! Per-day color markers keyed by ISO date strings.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::PetEvent;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as a marker key (`YYYY-MM-DD`).
pub fn iso_key(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Color tokens per day, keyed by `YYYY-MM-DD`.
///
/// Each key holds a set of colors: inserting a color already present is a
/// no-op, and first-seen order is kept so rendering is stable. Keys that are
/// not well-formed dates are kept but never match a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct MarkerMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl MarkerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build markers from events, one color per event, de-duplicated per day.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a PetEvent>) -> Self {
        let mut map = Self::new();
        for event in events {
            map.insert(event.date, event.marker_color());
        }
        map
    }

    /// Add a color for `date`. Returns false if it was already present.
    pub fn insert(&mut self, date: NaiveDate, color: &str) -> bool {
        self.insert_key(iso_key(date), color)
    }

    /// Add a color under a raw key. Returns false if it was already present.
    pub fn insert_key(&mut self, key: String, color: &str) -> bool {
        let colors = self.entries.entry(key).or_default();
        if colors.iter().any(|c| c == color) {
            return false;
        }
        colors.push(color.to_string());
        true
    }

    /// Add every color from `other`, keeping existing colors first.
    pub fn merge(&mut self, other: &MarkerMap) {
        for (key, colors) in other.iter() {
            for color in colors {
                self.insert_key(key.to_string(), color);
            }
        }
    }

    pub fn colors_for(&self, date: NaiveDate) -> &[String] {
        self.get(&iso_key(date)).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, colors)| (key.as_str(), colors.as_slice()))
    }

    /// Keys that can never match a date lookup.
    pub fn malformed_keys(&self) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|key| !is_iso_key(key))
            .map(String::as_str)
            .collect()
    }
}

/// `2025-1-5` parses as a date but is not the canonical key, so it is malformed too.
fn is_iso_key(key: &str) -> bool {
    NaiveDate::parse_from_str(key, ISO_DATE_FORMAT).is_ok_and(|date| iso_key(date) == key)
}

impl From<BTreeMap<String, Vec<String>>> for MarkerMap {
    fn from(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut map = Self::new();
        for (key, colors) in raw {
            map.entries.entry(key.clone()).or_default();
            for color in colors {
                map.insert_key(key.clone(), &color);
            }
        }
        map
    }
}

impl From<MarkerMap> for BTreeMap<String, Vec<String>> {
    fn from(map: MarkerMap) -> Self {
        map.entries
    }
}
