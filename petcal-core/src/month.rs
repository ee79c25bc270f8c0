//! Validated year/month pairs and month navigation.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{PetcalError, PetcalResult};

/// A calendar month identified by year and zero-based month index.
///
/// Construction rejects month indexes outside 0-11 and years at the edges of
/// chrono's representable range, so the months on either side always exist
/// and padding cells can be computed without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthIndex {
    first: NaiveDate,
}

impl MonthIndex {
    pub fn new(year: i32, month0: u32) -> PetcalResult<Self> {
        if month0 > 11 {
            return Err(PetcalError::InvalidMonth(month0));
        }
        if year <= NaiveDate::MIN.year() || year >= NaiveDate::MAX.year() {
            return Err(PetcalError::InvalidYear(year));
        }

        let first =
            NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(PetcalError::InvalidYear(year))?;

        Ok(MonthIndex { first })
    }

    /// The month a given date falls in.
    pub fn of(date: NaiveDate) -> PetcalResult<Self> {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Zero-based month (January = 0).
    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn num_days(&self) -> u32 {
        match self.first.month() {
            2 if is_leap_year(self.year()) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month0()
    }

    /// The following month, rolling December over into January of the next year.
    pub fn next(&self) -> PetcalResult<Self> {
        match self.month0() {
            11 => Self::new(self.year() + 1, 0),
            m => Self::new(self.year(), m + 1),
        }
    }

    /// The preceding month, rolling January back into December of the previous year.
    pub fn prev(&self) -> PetcalResult<Self> {
        match self.month0() {
            0 => Self::new(self.year() - 1, 11),
            m => Self::new(self.year(), m - 1),
        }
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
