//! Host identity and distribution name.

use super::read_trimmed;
use nanosys_common::{HostIdentity, Result, SourceError};
use std::collections::HashMap;
use std::path::Path;

pub const OS_RELEASE_PATH: &str = "/etc/os-release";

pub fn identity() -> Result<HostIdentity> {
    let uts = nix::sys::utsname::uname()
        .map_err(|e| SourceError::Unavailable(format!("uname failed: {}", e)))?;

    Ok(HostIdentity {
        hostname: uts.nodename().to_string_lossy().into_owned(),
        kernel: uts.release().to_string_lossy().into_owned(),
        arch: uts.machine().to_string_lossy().into_owned(),
    })
}

pub fn distribution() -> Result<String> {
    distribution_from(Path::new(OS_RELEASE_PATH))
}

pub fn distribution_from(path: &Path) -> Result<String> {
    parse_os_release(&read_trimmed(path)?)
}

/// `PRETTY_NAME`, or `NAME VERSION` when the pretty form is missing.
pub fn parse_os_release(content: &str) -> Result<String> {
    let fields: HashMap<&str, String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), unquote(value.trim())))
        .collect();

    if let Some(pretty) = fields.get("PRETTY_NAME").filter(|v| !v.is_empty()) {
        return Ok(pretty.clone());
    }

    match (fields.get("NAME"), fields.get("VERSION")) {
        (Some(name), Some(version)) => Ok(format!("{} {}", name, version)),
        (Some(name), None) => Ok(name.clone()),
        _ => Err(SourceError::parse("os-release has neither PRETTY_NAME nor NAME")),
    }
}

fn unquote(value: &str) -> String {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value).to_string()
}
