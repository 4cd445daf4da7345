use anyhow::{Result, bail};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::ui;
use crate::ui::format_size;

/// List unused files under `folder`
pub fn run(folder: &Path, days: Option<u32>) -> Result<()> {
    if folder.as_os_str().is_empty() || !folder.is_dir() {
        bail!("{} is not a directory", folder.display());
    }

    let config = Config::load()?;
    let days = days.unwrap_or(config.scan.unused_days);
    let lifecycle = super::lifecycle_from(&config)?;

    ui::header(&format!(
        "Unused files in {} (not accessed in {} days)",
        folder.display(),
        days
    ));

    let report = lifecycle.list_unused(folder, days);

    if report.entries.is_empty() {
        ui::info("No unused files found.");
    } else {
        for entry in &report.entries {
            println!(
                "  {:<32} {}  {:>9}  {}",
                entry.name.cyan(),
                entry.last_access_display().dimmed(),
                format_size(entry.size),
                entry.path.display().to_string().dimmed()
            );
        }
        println!();
        println!(
            "{}",
            format!(
                "{} file(s), {}",
                report.entries.len(),
                format_size(report.total_size())
            )
            .bold()
        );
    }

    if !report.skipped.is_empty() {
        ui::warn(&format!(
            "Skipped {} unreadable file(s); re-run with -v for details",
            report.skipped.len()
        ));
        for (path, reason) in &report.skipped {
            log::info!("Skipped {}: {reason}", path.display());
        }
    }

    Ok(())
}
