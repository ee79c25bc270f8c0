//! Event storage.
//!
//! The month view only needs "events in this month". Backends implement
//! [`EventStore`] and are handed to callers explicitly.

use std::path::{Path, PathBuf};

use crate::error::{PetcalError, PetcalResult};
use crate::event::PetEvent;
use crate::markers::MarkerMap;
use crate::month::MonthIndex;

/// Typed access to pet care events.
pub trait EventStore {
    fn events_in_month(&self, month: MonthIndex) -> PetcalResult<Vec<PetEvent>>;

    /// Markers for every event in `month`.
    fn markers_in_month(&self, month: MonthIndex) -> PetcalResult<MarkerMap> {
        let events = self.events_in_month(month)?;
        Ok(MarkerMap::from_events(&events))
    }
}

/// Events held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    events: Vec<PetEvent>,
}

impl MemoryEventStore {
    pub fn new(events: Vec<PetEvent>) -> Self {
        MemoryEventStore { events }
    }
}

impl EventStore for MemoryEventStore {
    fn events_in_month(&self, month: MonthIndex) -> PetcalResult<Vec<PetEvent>> {
        Ok(in_month(self.events.iter(), month))
    }
}

/// Events stored as a JSON array in a single file.
///
/// A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct JsonEventStore {
    path: PathBuf,
}

impl JsonEventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonEventStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_all(&self) -> PetcalResult<Vec<PetEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            PetcalError::Serialization(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl EventStore for JsonEventStore {
    fn events_in_month(&self, month: MonthIndex) -> PetcalResult<Vec<PetEvent>> {
        let events = self.load_all()?;
        Ok(in_month(events.iter(), month))
    }
}

fn in_month<'a>(events: impl Iterator<Item = &'a PetEvent>, month: MonthIndex) -> Vec<PetEvent> {
    let mut matching: Vec<PetEvent> = events
        .filter(|event| month.contains(event.date))
        .cloned()
        .collect();

    matching.sort_by(|a, b| a.date.cmp(&b.date));
    matching
}
