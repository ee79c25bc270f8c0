//! Localized weekday header and month title.

use chrono::{Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::locale::resolve_locale;
use crate::month::MonthIndex;

/// Seven short weekday labels in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayHeader {
    pub first_weekday: Weekday,
    pub labels: [String; 7],
}

impl WeekdayHeader {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Weekdays in the same order as the labels.
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut day = self.first_weekday;
        std::array::from_fn(|_| {
            let current = day;
            day = day.succ();
            current
        })
    }
}

/// Short weekday labels for `locale`, Sunday first.
pub fn weekday_header(locale: &str) -> WeekdayHeader {
    weekday_header_from(locale, Weekday::Sun)
}

/// Short weekday labels for `locale`, starting at `first_weekday`.
pub fn weekday_header_from(locale: &str, first_weekday: Weekday) -> WeekdayHeader {
    let locale = resolve_locale(locale);
    let mut day = first_weekday;

    let labels = std::array::from_fn(|_| {
        let label = sample_date(day).format_localized("%a", locale).to_string();
        day = day.succ();
        label
    });

    WeekdayHeader {
        first_weekday,
        labels,
    }
}

/// Localized "month year" title, e.g. "janvier 2025".
pub fn month_title(month: MonthIndex, locale: &str) -> String {
    let locale = resolve_locale(locale);
    month
        .first_day()
        .format_localized("%B %Y", locale)
        .to_string()
}

/// Any date falling on `weekday`; only its formatted name is used.
fn sample_date(weekday: Weekday) -> NaiveDate {
    // NaiveDate::default() is 1970-01-01, and 1970-01-04 was a Sunday.
    NaiveDate::default() + Days::new(3 + u64::from(weekday.num_days_from_sunday()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_header_starts_on_sunday() {
        let header = weekday_header("en-US");
        assert_eq!(
            header.labels,
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(String::from)
        );
        assert_eq!(header.first_weekday, Weekday::Sun);
    }

    #[test]
    fn french_header_uses_french_abbreviations() {
        let header = weekday_header("fr");
        assert_eq!(
            header.labels,
            ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."].map(String::from)
        );
    }

    #[test]
    fn header_rotates_to_first_weekday() {
        let header = weekday_header_from("en-US", Weekday::Mon);
        assert_eq!(header.labels[0], "Mon");
        assert_eq!(header.labels[6], "Sun");
        assert_eq!(header.weekdays()[0], Weekday::Mon);
        assert_eq!(header.weekdays()[6], Weekday::Sun);
    }

    #[test]
    fn unknown_locale_renders_default_names() {
        let header = weekday_header("not-a-locale");
        assert_eq!(header.labels[0], "Sun");
        assert_eq!(header.labels[6], "Sat");
    }

    #[test]
    fn sample_dates_fall_on_requested_weekday() {
        use chrono::Datelike;
        for day in [Weekday::Sun, Weekday::Wed, Weekday::Sat] {
            assert_eq!(sample_date(day).weekday(), day);
        }
    }

    #[test]
    fn month_titles_are_localized() {
        let jan = MonthIndex::new(2025, 0).unwrap();
        assert_eq!(month_title(jan, "en-US"), "January 2025");
        assert_eq!(month_title(jan, "fr"), "janvier 2025");
    }
}
