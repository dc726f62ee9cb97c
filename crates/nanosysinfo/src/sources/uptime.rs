//! Seconds since boot from `/proc/uptime`.

use super::read_trimmed;
use nanosys_common::{Result, SourceError};
use std::path::Path;

pub const UPTIME_PATH: &str = "/proc/uptime";

pub fn read() -> Result<u64> {
    parse_uptime(&read_trimmed(Path::new(UPTIME_PATH))?)
}

/// First field, rounded to whole seconds.
pub fn parse_uptime(content: &str) -> Result<u64> {
    let first = content
        .split_whitespace()
        .next()
        .ok_or_else(|| SourceError::parse("empty uptime file"))?;
    let secs: f64 = first
        .parse()
        .map_err(|_| SourceError::parse(format!("bad uptime value '{}'", first)))?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(SourceError::parse(format!("bad uptime value '{}'", first)));
    }
    Ok(secs.round() as u64)
}
