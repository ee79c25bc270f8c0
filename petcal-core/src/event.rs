//! Pet care events shown on the calendar.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What kind of care an event records. Each kind has a default marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Vaccination,
    Medication,
    VetVisit,
    Grooming,
    #[default]
    Other,
}

impl EventKind {
    pub fn default_color(self) -> &'static str {
        match self {
            EventKind::Vaccination => "#E53935",
            EventKind::Medication => "#1E88E5",
            EventKind::VetVisit => "#43A047",
            EventKind::Grooming => "#8E24AA",
            EventKind::Other => "#757575",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EventKind::Vaccination => "vaccination",
            EventKind::Medication => "medication",
            EventKind::VetVisit => "vet visit",
            EventKind::Grooming => "grooming",
            EventKind::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// A dated pet care event (all-day granularity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetEvent {
    pub pet: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub kind: EventKind,
    /// Overrides the kind's default marker color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PetEvent {
    pub fn new(pet: &str, title: &str, date: NaiveDate, kind: EventKind) -> Self {
        PetEvent {
            pet: pet.to_string(),
            title: title.to_string(),
            date,
            kind,
            color: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn marker_color(&self) -> &str {
        self.color
            .as_deref()
            .unwrap_or_else(|| self.kind.default_color())
    }
}

impl fmt::Display for PetEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} ({})", self.pet, self.title, self.kind)
    }
}
