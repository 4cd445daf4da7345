use anyhow::{Context, Result};
use dialoguer::Confirm;
use std::path::PathBuf;

use crate::config::Config;
use crate::ui;

/// Move the given files into quarantine
pub fn run(paths: &[PathBuf], yes: bool) -> Result<()> {
    let config = Config::load()?;
    let lifecycle = super::lifecycle_from(&config)?;

    ui::header("Quarantine");
    println!(
        "  {} file(s) will be moved to {}",
        paths.len(),
        lifecycle.quarantine_dir().display()
    );

    if !yes
        && !Confirm::new()
            .with_prompt("Move these files into quarantine?")
            .default(false)
            .interact()
            .context("Failed to read user input")?
    {
        ui::info("Aborted. No changes made.");
        return Ok(());
    }

    let report = lifecycle.quarantine_selection(paths)?;

    for (source, reason) in &report.failed {
        ui::error(&format!("{}: {reason}", source.display()));
    }

    ui::success(&format!(
        "Moved {} file(s) into quarantine",
        report.moved_count()
    ));
    if !report.failed.is_empty() {
        ui::warn(&format!("{} file(s) could not be moved", report.failed.len()));
    }

    Ok(())
}
