//! Unused-file detection: walk a directory tree and classify files by
//! last-access age.
//!
//! The scan is read-only. Only file metadata is inspected (contents are
//! never opened), so the scan itself cannot refresh access times. Mounts
//! with unusual atime semantics (`noatime` volumes report stale access
//! times for every file) are a platform limitation, not something the
//! detector tries to compensate for.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use walkdir::WalkDir;

/// A file classified as unused by a scan
#[derive(Debug, Clone)]
pub struct ScanEntry {
    /// File name (final path component)
    pub name: String,
    /// Last access time
    pub last_access: DateTime<Local>,
    /// Absolute path
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

impl ScanEntry {
    /// Last access time rendered for display
    pub fn last_access_display(&self) -> String {
        self.last_access.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Result of a scan, with an explicit per-file failure channel.
///
/// Files whose metadata could not be read are listed in `skipped` with the
/// reason; they never abort the walk and never appear in `entries`.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Unused files, in walk order
    pub entries: Vec<ScanEntry>,
    /// Files skipped because their metadata was unreadable
    pub skipped: Vec<(PathBuf, String)>,
}

impl ScanReport {
    /// Total size of all unused files found
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}

/// Scan `root` recursively for files whose last access is older than
/// `threshold_days`.
///
/// A file is unused when its last access is strictly before
/// `now - threshold_days`; a file accessed exactly at the threshold is
/// not unused. An empty or non-directory `root` yields an empty report
/// rather than an error - callers validate and report separately.
pub fn scan(root: &Path, threshold_days: u32) -> ScanReport {
    let mut report = ScanReport::default();

    if root.as_os_str().is_empty() || !root.is_dir() {
        log::debug!("Scan root {} is not a directory", root.display());
        return report;
    }

    let threshold = Duration::from_secs(u64::from(threshold_days) * 86_400);
    let Some(cutoff) = SystemTime::now().checked_sub(threshold) else {
        log::debug!("Threshold of {threshold_days} days predates the epoch");
        return report;
    };

    for result in WalkDir::new(root) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                report.skipped.push((path, err.to_string()));
                continue;
            }
        };

        // Regular files only; symlinks are neither followed nor reported
        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(meta) => meta,
            Err(err) => {
                report
                    .skipped
                    .push((entry.path().to_path_buf(), err.to_string()));
                continue;
            }
        };

        let accessed = match metadata.accessed() {
            Ok(time) => time,
            Err(err) => {
                report
                    .skipped
                    .push((entry.path().to_path_buf(), err.to_string()));
                continue;
            }
        };

        if accessed < cutoff {
            report.entries.push(ScanEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                last_access: DateTime::<Local>::from(accessed),
                path: entry.path().to_path_buf(),
                size: metadata.len(),
            });
        }
    }

    log::info!(
        "Scan of {} found {} unused file(s), skipped {}",
        root.display(),
        report.entries.len(),
        report.skipped.len()
    );
    report
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Backdate a file's access time by the given number of days
    fn set_accessed_days_ago(path: &Path, days: u64) {
        let time = SystemTime::now() - Duration::from_secs(days * 86_400);
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_times(fs::FileTimes::new().set_accessed(time))
            .unwrap();
    }

    #[test]
    fn test_nonexistent_root_is_empty() {
        let report = scan(Path::new("/does/not/exist"), 30);
        assert!(report.entries.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_empty_root_is_empty() {
        let report = scan(Path::new(""), 30);
        assert!(report.entries.is_empty());
    }

    #[test]
    fn test_file_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "data").unwrap();

        let report = scan(&file, 30);
        assert!(report.entries.is_empty());
    }

    #[test]
    fn test_threshold_boundary() {
        let tmp = TempDir::new().unwrap();
        let old = tmp.path().join("old.txt");
        let fresh = tmp.path().join("fresh.txt");
        fs::write(&old, "old").unwrap();
        fs::write(&fresh, "fresh").unwrap();

        // threshold = 60 days: A accessed 61 days ago, B accessed 59 days ago
        set_accessed_days_ago(&old, 61);
        set_accessed_days_ago(&fresh, 59);

        let report = scan(tmp.path(), 60);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].name, "old.txt");
        assert_eq!(report.entries[0].path, old);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_recursive_walk() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        let deep = nested.join("deep.txt");
        fs::write(&deep, "deep").unwrap();
        set_accessed_days_ago(&deep, 31);

        let report = scan(tmp.path(), 30);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].path, deep);
    }

    #[test]
    fn test_freshly_written_files_not_unused() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("new.txt"), "new").unwrap();

        let report = scan(tmp.path(), 30);
        assert!(report.entries.is_empty());
    }

    #[test]
    fn test_entry_carries_size_and_timestamp() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("sized.txt");
        fs::write(&file, "12345").unwrap();
        set_accessed_days_ago(&file, 10);

        let report = scan(tmp.path(), 5);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].size, 5);
        assert_eq!(report.total_size(), 5);
        // Rendered as "YYYY-MM-DD HH:MM:SS"
        assert_eq!(report.entries[0].last_access_display().len(), 19);
    }

    #[test]
    fn test_zero_threshold_includes_backdated_files() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("any.txt");
        fs::write(&file, "x").unwrap();
        set_accessed_days_ago(&file, 1);

        let report = scan(tmp.path(), 0);
        assert_eq!(report.entries.len(), 1);
    }
}
