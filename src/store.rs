//! The quarantine store: moves files into the quarantine directory and
//! records provenance in the manifest.
//!
//! Each input path is processed independently; one failure never aborts
//! the batch. The manifest is persisted once after the whole batch, so a
//! crash mid-batch can lose the manifest updates for files already moved
//! in that batch, but never prior quarantine history.

use chrono::Local;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::Manifest;

/// Result of a quarantine batch
#[derive(Debug, Default)]
pub struct QuarantineReport {
    /// Successfully moved files as (source, destination) pairs
    pub moved: Vec<(PathBuf, PathBuf)>,
    /// Files that could not be moved, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl QuarantineReport {
    /// Number of files actually moved; may be less than the batch size
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }
}

/// Owns the quarantine directory and collision-safe move-in
#[derive(Debug)]
pub struct QuarantineStore {
    dir: PathBuf,
}

impl QuarantineStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The quarantine directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Move `paths` into the quarantine directory, recording each success
    /// in `manifest` with today's date.
    ///
    /// The quarantine directory is created if absent. The manifest is
    /// saved once, after all paths are processed; a save failure is the
    /// only operation-level error.
    pub fn quarantine(&self, manifest: &mut Manifest, paths: &[PathBuf]) -> Result<QuarantineReport> {
        fs::create_dir_all(&self.dir)?;

        let today = Local::now().date_naive();
        let mut report = QuarantineReport::default();

        for source in paths {
            match self.move_in(source) {
                Ok(dest) => {
                    manifest.record(&dest, today);
                    log::info!("Quarantined {} -> {}", source.display(), dest.display());
                    report.moved.push((source.clone(), dest));
                }
                Err(err) => {
                    log::warn!("Failed to quarantine {}: {err}", source.display());
                    report.failed.push((source.clone(), err.to_string()));
                }
            }
        }

        manifest.save()?;
        Ok(report)
    }

    /// Move one file into the quarantine directory under a collision-safe
    /// name, returning the destination.
    fn move_in(&self, source: &Path) -> io::Result<PathBuf> {
        if !source.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "source does not exist",
            ));
        }
        if !source.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "source is not a regular file",
            ));
        }
        let base = source.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "source has no file name")
        })?;

        let dest = self.unique_destination(base);
        move_file(source, &dest)?;
        Ok(dest)
    }

    /// Pick a destination that does not overwrite an existing quarantined
    /// file: the base name as-is, or with a timestamp suffix inserted
    /// before the extension (`report.txt` -> `report_1722840000.txt`).
    fn unique_destination(&self, base: &OsStr) -> PathBuf {
        let dest = self.dir.join(base);
        if !dest.exists() {
            return dest;
        }

        let name = Path::new(base);
        let stem = name
            .file_stem()
            .unwrap_or(base)
            .to_string_lossy()
            .to_string();
        let ext = name
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let mut timestamp = Local::now().timestamp();
        loop {
            let candidate = self.dir.join(format!("{stem}_{timestamp}{ext}"));
            if !candidate.exists() {
                return candidate;
            }
            // Same-second collision; bump until free
            timestamp += 1;
        }
    }
}

/// Rename, falling back to copy + delete-source for cross-device moves
fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            log::debug!(
                "rename {} -> {} failed ({rename_err}); copying instead",
                source.display(),
                dest.display()
            );
            fs::copy(source, dest)?;
            if let Err(err) = fs::remove_file(source) {
                // Source survived; don't leave a second live copy behind
                let _ = fs::remove_file(dest);
                return Err(err);
            }
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
