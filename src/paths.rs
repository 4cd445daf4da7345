//! Centralized path resolution for cleanshelf
//!
//! This module provides platform-aware path resolution with environment
//! variable support, so the quarantine directory and the manifest's state
//! directory can be relocated without touching configuration files.
//!
//! # Environment Variables
//!
//! - `CLEANSHELF_CONFIG_DIR` - Override config directory
//! - `CLEANSHELF_STATE_DIR` - Override state directory (manifest location)
//! - `CLEANSHELF_QUARANTINE_DIR` - Override quarantine directory
//!
//! # Path Resolution Priority
//!
//! For config_dir():
//! 1. `CLEANSHELF_CONFIG_DIR` environment variable
//! 2. `XDG_CONFIG_HOME/cleanshelf` (if set)
//! 3. Default: `~/.config/cleanshelf`
//!
//! For state_dir():
//! 1. `CLEANSHELF_STATE_DIR` environment variable
//! 2. `XDG_STATE_HOME/cleanshelf` (if set)
//! 3. Default: `~/.local/state/cleanshelf`
//!
//! For quarantine_dir():
//! 1. `CLEANSHELF_QUARANTINE_DIR` environment variable
//! 2. Default: `~/CleanShelfRecycle`

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable for config directory override
pub const ENV_CONFIG_DIR: &str = "CLEANSHELF_CONFIG_DIR";

/// Environment variable for state directory override
pub const ENV_STATE_DIR: &str = "CLEANSHELF_STATE_DIR";

/// Environment variable for quarantine directory override
pub const ENV_QUARANTINE_DIR: &str = "CLEANSHELF_QUARANTINE_DIR";

/// Name of the manifest file inside the state directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// Get the cleanshelf config directory path
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = expand(&dir);
        log::debug!(
            "Using config dir from {}: {}",
            ENV_CONFIG_DIR,
            path.display()
        );
        return Ok(path);
    }

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_config).join("cleanshelf");
        log::debug!("Using XDG_CONFIG_HOME: {}", path.display());
        return Ok(path);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    let path = home.join(".config").join("cleanshelf");
    log::debug!("Using default config dir: {}", path.display());
    Ok(path)
}

/// Get the cleanshelf state directory path (holds the manifest)
pub fn state_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_STATE_DIR) {
        let path = expand(&dir);
        log::debug!("Using state dir from {}: {}", ENV_STATE_DIR, path.display());
        return Ok(path);
    }

    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(xdg_state).join("cleanshelf");
        log::debug!("Using XDG_STATE_HOME: {}", path.display());
        return Ok(path);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    let path = home.join(".local").join("state").join("cleanshelf");
    log::debug!("Using default state dir: {}", path.display());
    Ok(path)
}

/// Get the manifest file path
pub fn manifest_path() -> Result<PathBuf> {
    Ok(state_dir()?.join(MANIFEST_FILE))
}

/// Get the quarantine directory path
///
/// Quarantined files are held here until their retention window elapses.
/// The directory is created lazily by the quarantine store and never
/// deleted by cleanshelf itself.
pub fn quarantine_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_QUARANTINE_DIR) {
        let path = expand(&dir);
        log::debug!(
            "Using quarantine dir from {}: {}",
            ENV_QUARANTINE_DIR,
            path.display()
        );
        return Ok(path);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    let path = home.join("CleanShelfRecycle");
    log::debug!("Using default quarantine dir: {}", path.display());
    Ok(path)
}

/// Expand ~ and environment variables in a path string.
///
/// This is the canonical path expansion function for cleanshelf. All
/// modules should use this instead of calling shellexpand directly.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

// ============================================================================
// Tests
// ============================================================================

/// Test helper for code that reads process environment variables.
///
/// Environment mutation is process-global; a single lock serializes every
/// test that sets or removes variables so parallel tests can't observe
/// each other's overrides.
#[cfg(test)]
pub(crate) mod test_env {
    use std::env;
    use std::sync::{Mutex, OnceLock};

    /// Run `f` with some env vars set and others removed, restoring all
    /// previous values afterwards.
    pub fn with_env<F, R>(set: &[(&str, &str)], unset: &[&str], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        let _guard = LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let keys: Vec<&str> = set
            .iter()
            .map(|(k, _)| *k)
            .chain(unset.iter().copied())
            .collect();
        let saved: Vec<(&str, Option<String>)> =
            keys.iter().map(|k| (*k, env::var(k).ok())).collect();

        for (key, value) in set {
            // SAFETY: the lock serializes all env mutation in tests
            unsafe { env::set_var(key, value) };
        }
        for key in unset {
            // SAFETY: the lock serializes all env mutation in tests
            unsafe { env::remove_var(key) };
        }

        let result = f();

        for (key, original) in saved {
            match original {
                // SAFETY: the lock serializes all env mutation in tests
                Some(v) => unsafe { env::set_var(key, v) },
                None => unsafe { env::remove_var(key) },
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::test_env::with_env;
    use super::*;

    #[test]
    fn test_config_dir_env_override() {
        with_env(&[(ENV_CONFIG_DIR, "/custom/config/path")], &[], || {
            let result = config_dir().unwrap();
            assert_eq!(result, PathBuf::from("/custom/config/path"));
        });
    }

    #[test]
    fn test_state_dir_env_override() {
        with_env(&[(ENV_STATE_DIR, "/custom/state/path")], &[], || {
            let result = state_dir().unwrap();
            assert_eq!(result, PathBuf::from("/custom/state/path"));
        });
    }

    #[test]
    fn test_manifest_path_follows_state_dir() {
        with_env(&[(ENV_STATE_DIR, "/custom/state/path")], &[], || {
            let result = manifest_path().unwrap();
            assert_eq!(result, PathBuf::from("/custom/state/path/manifest.json"));
        });
    }

    #[test]
    fn test_quarantine_dir_env_override() {
        with_env(&[(ENV_QUARANTINE_DIR, "/custom/recycle")], &[], || {
            let result = quarantine_dir().unwrap();
            assert_eq!(result, PathBuf::from("/custom/recycle"));
        });
    }

    #[test]
    fn test_quarantine_dir_default() {
        with_env(&[], &[ENV_QUARANTINE_DIR], || {
            let result = quarantine_dir().unwrap();
            let home = dirs::home_dir().unwrap();
            assert_eq!(result, home.join("CleanShelfRecycle"));
        });
    }

    #[test]
    fn test_xdg_state_home() {
        with_env(
            &[("XDG_STATE_HOME", "/tmp/xdg-state-test")],
            &[ENV_STATE_DIR],
            || {
                let result = state_dir().unwrap();
                assert_eq!(result, PathBuf::from("/tmp/xdg-state-test/cleanshelf"));
            },
        );
    }

    #[test]
    fn test_expand_with_tilde() {
        let result = expand("~/test/path");
        let home = dirs::home_dir().unwrap();
        assert_eq!(result, home.join("test").join("path"));
    }

    #[test]
    fn test_expand_absolute() {
        let result = expand("/absolute/path");
        assert_eq!(result, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_env_var_constants() {
        assert_eq!(ENV_CONFIG_DIR, "CLEANSHELF_CONFIG_DIR");
        assert_eq!(ENV_STATE_DIR, "CLEANSHELF_STATE_DIR");
        assert_eq!(ENV_QUARANTINE_DIR, "CLEANSHELF_QUARANTINE_DIR");
    }
}
