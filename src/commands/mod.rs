pub mod init;
pub mod purge;
pub mod quarantine;
pub mod scan;
pub mod status;

use anyhow::Result;

use crate::config::Config;
use crate::lifecycle::Lifecycle;
use crate::paths;

/// Build a lifecycle from the resolved quarantine and manifest locations
fn lifecycle_from(config: &Config) -> Result<Lifecycle> {
    Ok(Lifecycle::new(
        config.quarantine_dir()?,
        paths::manifest_path()?,
    ))
}
