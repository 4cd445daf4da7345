use anyhow::{Context, Result};
use dialoguer::Confirm;

use crate::config::Config;
use crate::ui;

/// Permanently delete quarantined files past the retention window
pub fn run(retention: Option<u32>, yes: bool) -> Result<()> {
    let config = Config::load()?;
    let retention = retention.unwrap_or(config.quarantine.retention_days);
    let lifecycle = super::lifecycle_from(&config)?;

    ui::header("Purge Quarantine");

    if !yes
        && !Confirm::new()
            .with_prompt(format!(
                "Permanently delete quarantined files older than {retention} day(s)?"
            ))
            .default(false)
            .interact()
            .context("Failed to read user input")?
    {
        ui::info("Aborted. No changes made.");
        return Ok(());
    }

    let report = lifecycle.purge_expired(retention)?;

    for (path, reason) in &report.failed {
        ui::error(&format!("Could not remove {}: {reason}", path.display()));
    }
    if report.dropped > 0 {
        log::info!(
            "Dropped {} manifest entr(ies) whose files were already gone",
            report.dropped
        );
    }

    ui::success(&format!(
        "Permanently removed {} file(s) older than {retention} days",
        report.deleted_count()
    ));

    Ok(())
}
