use anyhow::Result;
use chrono::Weekday;
use petcal_core::config::PetcalConfig;
use petcal_core::weekday_header_from;

use crate::render::render_header;

pub fn run(
    config: &PetcalConfig,
    locale: Option<&str>,
    week_start: Option<Weekday>,
    json: bool,
) -> Result<()> {
    println!("{}", build_output(config, locale, week_start, json)?);
    Ok(())
}

fn build_output(
    config: &PetcalConfig,
    locale: Option<&str>,
    week_start: Option<Weekday>,
    json: bool,
) -> Result<String> {
    let locale = locale.unwrap_or(&config.locale);
    let header = weekday_header_from(locale, week_start.unwrap_or(config.week_start));

    if json {
        return Ok(serde_json::to_string_pretty(&header)?);
    }

    Ok(render_header(&header))
}
