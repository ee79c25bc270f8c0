//! Core types for the petcal month view.
//!
//! This crate computes everything a renderer needs to draw a month calendar:
//! - `grid` builds the padded 7-column cell sequence with today/selection/marker flags
//! - `header` produces localized weekday labels and month titles
//! - `markers` and `event` turn pet care events into per-day color markers
//! - `store` and `config` load those inputs from disk

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod header;
pub mod locale;
pub mod markers;
pub mod month;
pub mod store;

pub use error::{PetcalError, PetcalResult};
pub use grid::{CalendarCell, GridOptions, MonthGrid, compute_month_grid, marker_colors_for_date};
pub use header::{WeekdayHeader, month_title, weekday_header, weekday_header_from};
pub use markers::MarkerMap;
pub use month::MonthIndex;
