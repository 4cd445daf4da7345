//! Lifecycle orchestrator: composes the detector, quarantine store, and
//! purger into the three user-facing operations.
//!
//! Holds nothing beyond the two injected locations (quarantine directory
//! and manifest path), so callers - the CLI here, tests with temporary
//! directories - fully control where state lives.
//!
//! Each operation performs a full load-modify-save cycle over the
//! manifest and assumes no other process mutates it concurrently; there
//! is no cross-process lock. Run one cleanshelf invocation at a time.

use std::path::{Path, PathBuf};

use crate::detector::{self, ScanReport};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::purger::{self, PurgeReport};
use crate::store::{QuarantineReport, QuarantineStore};

pub struct Lifecycle {
    quarantine_dir: PathBuf,
    manifest_path: PathBuf,
}

impl Lifecycle {
    pub fn new(quarantine_dir: impl Into<PathBuf>, manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            quarantine_dir: quarantine_dir.into(),
            manifest_path: manifest_path.into(),
        }
    }

    /// The quarantine directory this lifecycle operates on
    pub fn quarantine_dir(&self) -> &Path {
        &self.quarantine_dir
    }

    /// Load the current manifest (for inspection by callers)
    pub fn manifest(&self) -> Result<Manifest> {
        Manifest::load(&self.manifest_path)
    }

    /// Scan `folder` for files unused longer than `threshold_days`
    pub fn list_unused(&self, folder: &Path, threshold_days: u32) -> ScanReport {
        detector::scan(folder, threshold_days)
    }

    /// Move the selected files into quarantine
    pub fn quarantine_selection(&self, paths: &[PathBuf]) -> Result<QuarantineReport> {
        let mut manifest = Manifest::load(&self.manifest_path)?;
        QuarantineStore::new(&self.quarantine_dir).quarantine(&mut manifest, paths)
    }

    /// Permanently delete quarantined files past the retention window
    pub fn purge_expired(&self, retention_days: u32) -> Result<PurgeReport> {
        let mut manifest = Manifest::load(&self.manifest_path)?;
        purger::purge(&mut manifest, retention_days)
    }
}

// ============================================================================
// Tests
// ============================================================================
