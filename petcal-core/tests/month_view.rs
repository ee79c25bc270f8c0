use chrono::{Datelike, NaiveDate, Weekday};
use petcal_core::event::{EventKind, PetEvent};
use petcal_core::store::{EventStore, MemoryEventStore};
use petcal_core::{
    GridOptions, MarkerMap, MonthGrid, MonthIndex, compute_month_grid, marker_colors_for_date,
    month_title, weekday_header, weekday_header_from,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn grids_are_whole_weeks_with_true_day_counts() {
    let markers = MarkerMap::new();
    for year in 1999..=2028 {
        for month0 in 0..12 {
            let cells = compute_month_grid(year, month0, None, &markers).unwrap();
            let expected = MonthIndex::new(year, month0).unwrap().num_days() as usize;

            assert_eq!(cells.len() % 7, 0);
            assert_eq!(cells.iter().filter(|c| c.in_current_month).count(), expected);
        }
    }
}

#[test]
fn february_leap_and_common_years() {
    let markers = MarkerMap::new();
    let count = |year| {
        compute_month_grid(year, 1, None, &markers)
            .unwrap()
            .iter()
            .filter(|c| c.in_current_month)
            .count()
    };
    assert_eq!(count(2024), 29);
    assert_eq!(count(2023), 28);
}

#[test]
fn french_header_for_january_2025() {
    let header = weekday_header("fr");
    for label in ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."] {
        assert!(header.iter().any(|l| l == label), "missing {label}");
    }
    assert_eq!(header.labels[0], "dim.");
    assert_eq!(month_title(MonthIndex::new(2025, 0).unwrap(), "fr"), "janvier 2025");
}

#[test]
fn markers_from_json_land_on_one_cell() {
    let markers: MarkerMap =
        serde_json::from_str(r##"{"2025-01-15": ["#FF0000", "#00FF00"]}"##).unwrap();

    let cells = compute_month_grid(2025, 0, None, &markers).unwrap();
    let marked: Vec<_> = cells.iter().filter(|c| !c.markers.is_empty()).collect();

    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].date, date(2025, 1, 15));
    assert_eq!(marked[0].markers, ["#FF0000", "#00FF00"]);
    assert_eq!(
        marker_colors_for_date(date(2025, 1, 15), &markers),
        ["#FF0000", "#00FF00"]
    );
}

#[test]
fn malformed_marker_keys_never_match() {
    let markers: MarkerMap =
        serde_json::from_str(r##"{"15/01/2025": ["#FF0000"], "2025-1-15": ["#00FF00"]}"##).unwrap();

    let cells = compute_month_grid(2025, 0, None, &markers).unwrap();
    assert!(cells.iter().all(|c| c.markers.is_empty()));
    assert_eq!(markers.malformed_keys().len(), 2);
}

#[test]
fn repeated_builds_are_structurally_equal() {
    let markers: MarkerMap = serde_json::from_str(r##"{"2025-01-15": ["#FF0000"]}"##).unwrap();
    let selected = Some(date(2025, 1, 3));
    let first = compute_month_grid(2025, 0, selected, &markers).unwrap();
    let second = compute_month_grid(2025, 0, selected, &markers).unwrap();
    assert_eq!(first, second);
}

#[test]
fn store_markers_feed_a_monday_first_grid() {
    let store = MemoryEventStore::new(vec![
        PetEvent::new("Rex", "Booster", date(2025, 3, 10), EventKind::Vaccination),
        PetEvent::new("Rex", "Deworming", date(2025, 3, 10), EventKind::Medication),
        PetEvent::new("Mia", "Bath", date(2025, 4, 1), EventKind::Grooming),
    ]);
    let march = MonthIndex::new(2025, 2).unwrap();
    let markers = store.markers_in_month(march).unwrap();

    let options = GridOptions {
        first_weekday: Weekday::Mon,
        fixed_weeks: true,
    };
    let grid = MonthGrid::new(march, date(2025, 3, 10))
        .selected(Some(date(2025, 3, 12)))
        .markers(&markers)
        .options(options);
    let header = weekday_header_from("en-US", options.first_weekday);

    let weeks = grid.weeks();
    assert_eq!(weeks.len(), 6);
    for week in &weeks {
        for (cell, weekday) in week.iter().zip(header.weekdays()) {
            assert_eq!(cell.date.weekday(), weekday);
        }
    }

    let today = grid.cells().into_iter().find(|c| c.is_today).unwrap();
    assert_eq!(today.date, date(2025, 3, 10));
    assert_eq!(today.markers, ["#E53935", "#1E88E5"]);
    assert!(grid.cells().iter().all(|c| c.date != date(2025, 4, 1) || c.markers.is_empty()));
}
