use anyhow::Result;

use crate::config::Config;
use crate::ui;

/// Write a default config file
pub fn run(force: bool) -> Result<()> {
    ui::header("Initialize Configuration");

    let path = Config::path()?;
    if path.exists() && !force {
        ui::warn(&format!("Config already exists: {}", path.display()));
        ui::info("Use --force to overwrite");
        return Ok(());
    }

    Config::default().save()?;

    ui::success(&format!("Created {}", path.display()));
    println!();
    ui::info("Edit the config file to adjust the unused-age threshold and retention window");

    Ok(())
}
