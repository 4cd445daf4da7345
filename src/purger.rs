//! Retention purge: permanently delete quarantined files whose retention
//! window has elapsed, reconciling the manifest along the way.
//!
//! Each manifest entry resolves to one of four outcomes:
//! - malformed recorded date: kept verbatim, so a parsing anomaly never
//!   loses track of a file;
//! - file no longer present (externally removed or restored): entry
//!   dropped, nothing deleted;
//! - file present and old enough: deleted, entry dropped on success and
//!   kept on failure;
//! - file present and still within retention: kept.
//!
//! Running a purge twice in succession deletes nothing the second time
//! and leaves the manifest unchanged.

use chrono::Local;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::manifest::Manifest;

/// Result of a purge pass
#[derive(Debug, Default)]
pub struct PurgeReport {
    /// Files permanently deleted
    pub deleted: Vec<PathBuf>,
    /// Files eligible for deletion that could not be removed, with reason
    pub failed: Vec<(PathBuf, String)>,
    /// Entries dropped because their file no longer exists
    pub dropped: u64,
}

impl PurgeReport {
    /// Number of files permanently deleted
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }
}

/// Delete quarantined files recorded at least `retention_days` ago and
/// rewrite the reconciled manifest in one save.
pub fn purge(manifest: &mut Manifest, retention_days: u32) -> Result<PurgeReport> {
    let today = Local::now().date_naive();
    let mut report = PurgeReport::default();
    let mut kept = BTreeMap::new();

    for (path_str, date_str) in manifest.take_entries() {
        let path = PathBuf::from(&path_str);

        let Some(recorded) = Manifest::parse_date(&date_str) else {
            log::warn!("Keeping manifest entry with unparseable date: {path_str} = {date_str}");
            kept.insert(path_str, date_str);
            continue;
        };

        if !path.exists() {
            log::debug!("Dropping entry for externally removed file: {path_str}");
            report.dropped += 1;
            continue;
        }

        let age_days = (today - recorded).num_days();
        if age_days >= i64::from(retention_days) {
            match fs::remove_file(&path) {
                Ok(()) => {
                    log::info!("Purged {path_str} (quarantined {age_days} day(s) ago)");
                    report.deleted.push(path);
                }
                Err(err) => {
                    log::warn!("Could not purge {path_str}: {err}");
                    report.failed.push((path, err.to_string()));
                    kept.insert(path_str, date_str);
                }
            }
        } else {
            kept.insert(path_str, date_str);
        }
    }

    manifest.set_entries(kept);
    manifest.save()?;
    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================
