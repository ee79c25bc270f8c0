mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use clap::{ArgAction, Parser, Subcommand};
use petcal_core::MonthIndex;
use petcal_core::config::{PetcalConfig, parse_weekday};
use petcal_core::store::{EventStore, JsonEventStore};
use tracing_subscriber::EnvFilter;

use crate::commands::month::MonthArgs;

#[derive(Parser)]
#[command(name = "petcal")]
#[command(about = "Month calendar for your pets' care events")]
struct Cli {
    /// Config file (defaults to ~/.config/petcal/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with event markers
    Month {
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month, 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Locale for weekday and month names (e.g. "fr", "en-US")
        #[arg(short, long)]
        locale: Option<String>,

        /// Highlight this date (YYYY-MM-DD)
        #[arg(short, long)]
        select: Option<NaiveDate>,

        /// JSON object mapping YYYY-MM-DD to marker colors
        #[arg(long)]
        markers: Option<PathBuf>,

        /// JSON array of pet care events (overrides events_file from config)
        #[arg(long)]
        events: Option<PathBuf>,

        /// First column of the grid (sunday, monday, ...)
        #[arg(long, value_parser = parse_weekday)]
        week_start: Option<Weekday>,

        /// Always show six weeks
        #[arg(long)]
        fixed_weeks: bool,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the localized weekday header
    Header {
        #[arg(short, long)]
        locale: Option<String>,

        #[arg(long, value_parser = parse_weekday)]
        week_start: Option<Weekday>,

        #[arg(long)]
        json: bool,
    },
    /// Write a commented default config file
    InitConfig {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => PetcalConfig::config_path()?,
    };

    match cli.command {
        Commands::InitConfig { force } => commands::init_config::run(&config_path, force),
        Commands::Header {
            locale,
            week_start,
            json,
        } => {
            let config = PetcalConfig::load(&config_path)?;
            commands::header::run(&config, locale.as_deref(), week_start, json)
        }
        Commands::Month {
            year,
            month,
            locale,
            select,
            markers,
            events,
            week_start,
            fixed_weeks,
            json,
        } => {
            let config = PetcalConfig::load(&config_path)?;
            let today = Local::now().date_naive();
            let month = resolve_month(year, month, select, today)?;

            let store = events
                .or_else(|| config.events_path())
                .map(JsonEventStore::new);

            let args = MonthArgs {
                month,
                today,
                locale,
                selected: select,
                markers_file: markers,
                week_start,
                fixed_weeks,
                json,
            };

            commands::month::run(
                &config,
                store.as_ref().map(|s| s as &dyn EventStore),
                args,
            )
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Month to show: explicit year/month, else the selected date's month, else today's.
fn resolve_month(
    year: Option<i32>,
    month: Option<u32>,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<MonthIndex> {
    let anchor = match (year, month, selected) {
        (None, None, Some(date)) => date,
        _ => today,
    };

    let year = year.unwrap_or(anchor.year());
    let month0 = month.map(|m| m - 1).unwrap_or(anchor.month0());

    Ok(MonthIndex::new(year, month0)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_defaults_to_today() {
        let month = resolve_month(None, None, None, date(2025, 3, 14)).unwrap();
        assert_eq!((month.year(), month.month0()), (2025, 2));
    }

    #[test]
    fn month_follows_selection_when_not_given() {
        let month = resolve_month(None, None, Some(date(2024, 2, 29)), date(2025, 3, 14)).unwrap();
        assert_eq!((month.year(), month.month0()), (2024, 1));
    }

    #[test]
    fn explicit_month_is_one_based() {
        let month = resolve_month(Some(2025), Some(1), Some(date(2024, 6, 1)), date(2025, 3, 14)).unwrap();
        assert_eq!((month.year(), month.month0()), (2025, 0));
    }

    #[test]
    fn explicit_year_keeps_current_month() {
        let month = resolve_month(Some(2030), None, None, date(2025, 3, 14)).unwrap();
        assert_eq!((month.year(), month.month0()), (2030, 2));
    }

    #[test]
    fn cli_parses_month_flags() {
        let cli = Cli::try_parse_from([
            "petcal", "month", "--year", "2025", "--month", "1", "--locale", "fr",
            "--week-start", "monday", "--select", "2025-01-15", "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Month {
                year,
                month,
                locale,
                week_start,
                select,
                json,
                ..
            } => {
                assert_eq!(year, Some(2025));
                assert_eq!(month, Some(1));
                assert_eq!(locale.as_deref(), Some("fr"));
                assert_eq!(week_start, Some(Weekday::Mon));
                assert_eq!(select, Some(date(2025, 1, 15)));
                assert!(json);
            }
            _ => panic!("expected month command"),
        }
    }

    #[test]
    fn cli_rejects_month_out_of_range() {
        assert!(Cli::try_parse_from(["petcal", "month", "--month", "13"]).is_err());
        assert!(Cli::try_parse_from(["petcal", "month", "--month", "0"]).is_err());
    }

    #[test]
    fn cli_rejects_bad_dates_and_weekdays() {
        assert!(Cli::try_parse_from(["petcal", "month", "--select", "15/01/2025"]).is_err());
        assert!(Cli::try_parse_from(["petcal", "header", "--week-start", "someday"]).is_err());
    }
}
