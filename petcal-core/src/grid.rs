//! Month grid computation.
//!
//! A month view is a 7-column grid. The first row is padded with trailing days
//! of the previous month and the last row with leading days of the next month.
//! Only days of the requested month are flagged as today/selected or carry
//! markers; padding cells are plain dates.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use crate::error::PetcalResult;
use crate::markers::MarkerMap;
use crate::month::MonthIndex;

const DAYS_PER_WEEK: usize = 7;

/// Number of cells in a fixed six-week grid.
pub const FIXED_GRID_CELLS: usize = 6 * DAYS_PER_WEEK;

/// One day in a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub markers: Vec<String>,
}

/// Layout options for a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Weekday shown in the first column.
    pub first_weekday: Weekday,
    /// Always emit six weeks so month views keep the same height.
    pub fixed_weeks: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            first_weekday: Weekday::Sun,
            fixed_weeks: false,
        }
    }
}

/// Builder for the cells of one month.
///
/// `today` is passed in rather than read from the clock so the result is a
/// pure function of the builder's inputs.
#[derive(Debug, Clone)]
pub struct MonthGrid<'a> {
    month: MonthIndex,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    markers: Option<&'a MarkerMap>,
    options: GridOptions,
}

impl<'a> MonthGrid<'a> {
    pub fn new(month: MonthIndex, today: NaiveDate) -> Self {
        MonthGrid {
            month,
            today,
            selected: None,
            markers: None,
            options: GridOptions::default(),
        }
    }

    pub fn selected(mut self, date: Option<NaiveDate>) -> Self {
        self.selected = date;
        self
    }

    pub fn markers(mut self, markers: &'a MarkerMap) -> Self {
        self.markers = Some(markers);
        self
    }

    pub fn options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    pub fn month(&self) -> MonthIndex {
        self.month
    }

    /// Number of padding cells before the first of the month.
    pub fn leading_days(&self) -> u32 {
        let first = self.month.first_day().weekday().num_days_from_sunday();
        let start = self.options.first_weekday.num_days_from_sunday();
        (first + 7 - start) % 7
    }

    pub fn cells(&self) -> Vec<CalendarCell> {
        let leading = self.leading_days() as usize;
        let days = self.month.num_days() as usize;

        let total = if self.options.fixed_weeks {
            FIXED_GRID_CELLS
        } else {
            (leading + days).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK
        };

        let start = self.month.first_day() - Days::new(leading as u64);
        let cells: Vec<CalendarCell> = start
            .iter_days()
            .take(total)
            .map(|date| self.cell(date))
            .collect();

        debug!(
            month = %self.month,
            leading,
            cells = cells.len(),
            "Built month grid"
        );

        cells
    }

    /// Cells split into rows of seven.
    pub fn weeks(&self) -> Vec<Vec<CalendarCell>> {
        self.cells()
            .chunks(DAYS_PER_WEEK)
            .map(<[CalendarCell]>::to_vec)
            .collect()
    }

    fn cell(&self, date: NaiveDate) -> CalendarCell {
        let in_current_month = self.month.contains(date);

        let markers = match self.markers {
            Some(markers) if in_current_month => markers.colors_for(date).to_vec(),
            _ => Vec::new(),
        };

        CalendarCell {
            date,
            in_current_month,
            is_today: in_current_month && date == self.today,
            is_selected: in_current_month && self.selected == Some(date),
            markers,
        }
    }
}

/// Cells for `month0` (0-11) of `year`, Sunday first, with today taken from the local clock.
pub fn compute_month_grid(
    year: i32,
    month0: u32,
    selected: Option<NaiveDate>,
    markers: &MarkerMap,
) -> PetcalResult<Vec<CalendarCell>> {
    let month = MonthIndex::new(year, month0)?;
    let today = Local::now().date_naive();

    Ok(MonthGrid::new(month, today)
        .selected(selected)
        .markers(markers)
        .cells())
}

/// Marker colors for `date`, empty when the map has no entry.
pub fn marker_colors_for_date(date: NaiveDate, markers: &MarkerMap) -> Vec<String> {
    markers.colors_for(date).to_vec()
}
