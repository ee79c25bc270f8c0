use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use petcal_core::config::PetcalConfig;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}.\n\n\
            Use --force to overwrite it.",
            path.display()
        );
    }

    PetcalConfig::create_default_config(path)?;
    println!("{}", format!("Created config at {}", path.display()).green());

    Ok(())
}
