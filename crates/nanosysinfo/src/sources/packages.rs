//! Pending package upgrades from apt.

use crate::command::capture_checked;
use chrono::{DateTime, Local};
use nanosys_common::{PackageUpdate, PackageUpdateList, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Rewritten by every `apt update`, so its mtime doubles as "last checked".
pub const PACKAGE_CACHE_PATH: &str = "/var/cache/apt/pkgcache.bin";

pub fn read() -> Result<PackageUpdateList> {
    let text = capture_checked("apt", &["list", "--upgradable"], true)?;
    let last_checked = cache_mtime(Path::new(PACKAGE_CACHE_PATH))
        .map_err(|e| debug!("No package cache timestamp: {}", e))
        .ok();

    Ok(PackageUpdateList {
        updates: parse_upgradable(&text),
        last_checked,
    })
}

/// Lines naming a package carry a `name/suite` separator; the banner,
/// `Listing...` and the CLI stability warning do not.
pub fn parse_upgradable(text: &str) -> Vec<PackageUpdate> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| line.split_once('/'))
        .map(|(name, rest)| PackageUpdate {
            name: name.to_string(),
            version_info: rest.to_string(),
        })
        .collect()
}

pub fn cache_mtime(path: &Path) -> Result<DateTime<Local>> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Local>::from(modified))
}
