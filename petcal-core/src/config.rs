//! petcal configuration.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{PetcalError, PetcalResult};
use crate::grid::GridOptions;

static DEFAULT_LOCALE: &str = "en-US";

/// Prefix for environment overrides, e.g. `PETCAL_LOCALE=fr`.
pub const ENV_PREFIX: &str = "PETCAL";

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_week_start() -> Weekday {
    Weekday::Sun
}

fn default_max_markers() -> usize {
    3
}

/// Configuration at ~/.config/petcal/config.toml, overridable from the environment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PetcalConfig {
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_week_start")]
    pub week_start: Weekday,

    #[serde(default)]
    pub fixed_weeks: bool,

    /// Marker dots drawn per day before collapsing into a "+N" count.
    #[serde(default = "default_max_markers")]
    pub max_markers: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,
}

impl Default for PetcalConfig {
    fn default() -> Self {
        PetcalConfig {
            locale: default_locale(),
            week_start: default_week_start(),
            fixed_weeks: false,
            max_markers: default_max_markers(),
            events_file: None,
        }
    }
}

impl PetcalConfig {
    pub fn config_path() -> PetcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PetcalError::Config("Could not determine config directory".into()))?
            .join("petcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path` (optional) with `PETCAL_*` environment overrides.
    pub fn load(path: &Path) -> PetcalResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`load`](Self::load), but reading overrides from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(
        path: &Path,
        env: Option<config::Map<String, String>>,
    ) -> PetcalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .map_err(|e| PetcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PetcalError::Config(e.to_string()))
    }

    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            first_weekday: self.week_start,
            fixed_weeks: self.fixed_weeks,
        }
    }

    /// Events file with `~` expanded.
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file.as_ref().map(|path| {
            PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
        })
    }

    pub fn save(&self, path: &Path) -> PetcalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| PetcalError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| PetcalError::Config(format!("Could not write config file: {e}")))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PetcalResult<()> {
        let contents = format!(
            "\
# petcal configuration

# Locale for weekday and month names:
# locale = \"{}\"

# First column of the month grid (sunday, monday, ...):
# week_start = \"sunday\"

# Always show six weeks:
# fixed_weeks = false

# Marker dots per day before showing a count:
# max_markers = {}

# Pet care events (JSON array):
# events_file = \"~/.local/share/petcal/events.json\"
",
            DEFAULT_LOCALE,
            default_max_markers()
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PetcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PetcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Parse a weekday name ("mon", "Monday", ...).
pub fn parse_weekday(s: &str) -> PetcalResult<Weekday> {
    s.trim()
        .parse()
        .map_err(|_| PetcalError::InvalidWeekday(s.to_string()))
}
