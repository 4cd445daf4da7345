use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::manifest::Manifest;
use crate::ui;

/// Show the quarantine directory and manifest state
pub fn run() -> Result<()> {
    let config = Config::load()?;
    let lifecycle = super::lifecycle_from(&config)?;
    let retention = config.quarantine.retention_days;

    ui::header("Quarantine Status");

    let dir = lifecycle.quarantine_dir();
    if dir.exists() {
        ui::kv("Quarantine dir", &dir.display().to_string());
    } else {
        ui::kv(
            "Quarantine dir",
            &format!("{} (not created yet)", dir.display()),
        );
    }

    let manifest = lifecycle.manifest()?;
    ui::kv("Manifest", &manifest.path().display().to_string());

    if manifest.is_empty() {
        println!();
        ui::info("No quarantined files.");
        return Ok(());
    }

    println!();
    let today = Local::now().date_naive();
    let mut eligible = 0usize;
    let mut missing = 0usize;

    for (path, date_str) in manifest.iter() {
        let (icon, note) = match Manifest::parse_date(date_str) {
            None => ("?".yellow(), format!("unparseable date {date_str:?}")),
            Some(recorded) => {
                let age = (today - recorded).num_days();
                if !Path::new(path).exists() {
                    missing += 1;
                    ("⚠".yellow(), format!("{age} day(s) old, file missing"))
                } else if age >= i64::from(retention) {
                    eligible += 1;
                    ("✗".red(), format!("{age} day(s) old, purge-eligible"))
                } else {
                    ("✓".green(), format!("{age} day(s) old"))
                }
            }
        };
        println!("  {icon} {:<48} {}", path, note.dimmed());
    }

    println!();
    println!(
        "{}",
        format!(
            "{} entr(ies), {eligible} purge-eligible at {retention}-day retention",
            manifest.len()
        )
        .bold()
    );
    if missing > 0 {
        ui::warn(&format!(
            "{missing} entr(ies) point at files no longer present; the next purge will drop them"
        ));
    }

    Ok(())
}
