use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use petcal_core::config::PetcalConfig;
use petcal_core::store::EventStore;
use petcal_core::{MarkerMap, MonthGrid, MonthIndex, month_title, weekday_header_from};
use serde_json::json;
use tracing::{debug, warn};

use crate::render::render_month;

/// Command-line inputs for `petcal month`, already resolved against today.
pub struct MonthArgs {
    pub month: MonthIndex,
    pub today: NaiveDate,
    pub locale: Option<String>,
    pub selected: Option<NaiveDate>,
    pub markers_file: Option<PathBuf>,
    pub week_start: Option<Weekday>,
    pub fixed_weeks: bool,
    pub json: bool,
}

pub fn run(config: &PetcalConfig, store: Option<&dyn EventStore>, args: MonthArgs) -> Result<()> {
    println!("{}", build_output(config, store, &args)?);
    Ok(())
}

fn build_output(
    config: &PetcalConfig,
    store: Option<&dyn EventStore>,
    args: &MonthArgs,
) -> Result<String> {
    let locale = args.locale.as_deref().unwrap_or(&config.locale);

    let mut options = config.grid_options();
    if let Some(week_start) = args.week_start {
        options.first_weekday = week_start;
    }
    options.fixed_weeks |= args.fixed_weeks;

    let markers = load_markers(store, args)?;

    let grid = MonthGrid::new(args.month, args.today)
        .selected(args.selected)
        .markers(&markers)
        .options(options);
    let header = weekday_header_from(locale, options.first_weekday);
    let title = month_title(args.month, locale);

    if args.json {
        let view = json!({
            "month": args.month.to_string(),
            "title": title,
            "header": header,
            "cells": grid.cells(),
        });
        return Ok(serde_json::to_string_pretty(&view)?);
    }

    Ok(render_month(&title, &header, &grid.weeks(), config.max_markers))
}

/// Markers from the event store, plus any explicit marker file.
fn load_markers(store: Option<&dyn EventStore>, args: &MonthArgs) -> Result<MarkerMap> {
    let mut markers = match store {
        Some(store) => store
            .markers_in_month(args.month)
            .context("Could not load events")?,
        None => MarkerMap::new(),
    };

    if let Some(path) = &args.markers_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read marker file {}", path.display()))?;
        let extra: MarkerMap = serde_json::from_str(&content)
            .with_context(|| format!("Invalid marker file {}", path.display()))?;

        for key in extra.malformed_keys() {
            warn!(key, "Ignoring marker key that is not a YYYY-MM-DD date");
        }

        markers.merge(&extra);
    }

    debug!(days = markers.len(), "Loaded markers");
    Ok(markers)
}
