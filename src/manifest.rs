//! The quarantine manifest: a durable mapping from quarantined-file path
//! to the date the file was moved into quarantine.
//!
//! The manifest is the only durable state this tool owns. It is a single
//! pretty-printed JSON object (`"absolute path": "YYYY-MM-DD"`) loaded in
//! full at the start of a quarantine or purge operation and rewritten in
//! full at the end. Dates are kept as strings so an entry with a malformed
//! date survives load/save untouched instead of poisoning the document.
//!
//! A corrupt manifest file is treated as empty rather than an error: prior
//! history is lost, but the tool stays usable. Callers are warned via the
//! log when this happens.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Date format used for manifest values
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The quarantine manifest, bound to its storage path.
///
/// Entries are kept in a `BTreeMap` so serialization order is stable and
/// repeated saves of the same logical content are byte-identical.
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Load the manifest from `path`, or return an empty manifest if the
    /// file doesn't exist.
    ///
    /// A file that exists but cannot be parsed is treated as empty (with a
    /// warning); an unreadable file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Manifest does not exist, starting empty");
            return Ok(Self {
                path: path.to_path_buf(),
                entries: BTreeMap::new(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let entries = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!(
                    "Manifest {} is corrupt ({err}); treating it as empty. \
                     Prior quarantine history is lost.",
                    path.display()
                );
                BTreeMap::new()
            }
        };

        log::debug!("Loaded manifest from {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Persist the manifest in one write
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::ManifestWrite {
                path: self.path.clone(),
                source,
            })?;
        }

        let mut content = serde_json::to_string_pretty(&self.entries)?;
        content.push('\n');

        fs::write(&self.path, content).map_err(|source| Error::ManifestWrite {
            path: self.path.clone(),
            source,
        })?;

        log::debug!("Saved manifest to {}", self.path.display());
        Ok(())
    }

    /// The path this manifest persists to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a quarantined file with the date it was moved in
    pub fn record(&mut self, dest: &Path, date: NaiveDate) {
        self.entries.insert(
            dest.display().to_string(),
            date.format(DATE_FORMAT).to_string(),
        );
    }

    /// Whether a quarantined path is tracked
    pub fn contains(&self, dest: &Path) -> bool {
        self.entries.contains_key(&dest.display().to_string())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (quarantined path, recorded date string) entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    /// Take the entries out, leaving the manifest empty.
    ///
    /// Used by the purger to rebuild the entry set in one pass.
    pub fn take_entries(&mut self) -> BTreeMap<String, String> {
        std::mem::take(&mut self.entries)
    }

    /// Put a rebuilt entry set back
    pub fn set_entries(&mut self, entries: BTreeMap<String, String>) {
        self.entries = entries;
    }

    /// Parse a recorded date string, if well-formed
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_is_empty() {
        let tmp = TempDir::new().unwrap();
        let manifest = Manifest::load(&tmp.path().join("manifest.json")).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_corrupt_file_treated_as_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("manifest.json");
        fs::write(&path, "{ not json at all").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_record_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("manifest.json");

        let mut manifest = Manifest::load(&path).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        manifest.record(Path::new("/recycle/report.txt"), date);
        manifest.save().unwrap();

        let reloaded = Manifest::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.contains(Path::new("/recycle/report.txt")));
        let (_, recorded) = reloaded.iter().next().unwrap();
        assert_eq!(recorded, "2025-03-14");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("state").join("deep").join("manifest.json");

        let mut manifest = Manifest::load(&path).unwrap();
        manifest.record(
            Path::new("/recycle/a.txt"),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        manifest.save().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_resave_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("manifest.json");

        let mut manifest = Manifest::load(&path).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        manifest.record(Path::new("/recycle/b.txt"), date);
        manifest.record(Path::new("/recycle/a.txt"), date);
        manifest.save().unwrap();
        let first = fs::read(&path).unwrap();

        let reloaded = Manifest::load(&path).unwrap();
        reloaded.save().unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_date_survives_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("manifest.json");
        fs::write(&path, r#"{"/recycle/odd.txt": "not-a-date"}"#).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 1);
        manifest.save().unwrap();

        let reloaded = Manifest::load(&path).unwrap();
        let (_, value) = reloaded.iter().next().unwrap();
        assert_eq!(value, "not-a-date");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            Manifest::parse_date("2025-03-14"),
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert_eq!(Manifest::parse_date("14/03/2025"), None);
        assert_eq!(Manifest::parse_date(""), None);
    }
}
