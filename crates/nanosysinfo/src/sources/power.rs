//! Board voltage and throttle flags from the Raspberry Pi firmware tool.
//!
//! Only present on Pi boards. Everywhere else `vcgencmd` is missing and both
//! reads fail with an unavailable error.

use crate::command::capture_checked;
use nanosys_common::{Result, SourceError, ThrottleState};

const VCGENCMD: &str = "vcgencmd";

pub fn core_volts() -> Result<f64> {
    parse_volts(&capture_checked(VCGENCMD, &["measure_volts", "core"], false)?)
}

pub fn throttle_state() -> Result<ThrottleState> {
    parse_throttled(&capture_checked(VCGENCMD, &["get_throttled"], false)?)
}

/// `volt=1.2000V` -> 1.2
pub fn parse_volts(output: &str) -> Result<f64> {
    let value = output
        .trim()
        .split_once('=')
        .map(|(_, v)| v.trim_end_matches('V'))
        .ok_or_else(|| {
            SourceError::parse(format!("unexpected voltage output '{}'", output.trim()))
        })?;

    value
        .parse()
        .map_err(|_| SourceError::parse(format!("bad voltage '{}'", value)))
}

/// `throttled=0x50005` -> decoded flags
pub fn parse_throttled(output: &str) -> Result<ThrottleState> {
    let hex = output
        .trim()
        .strip_prefix("throttled=")
        .ok_or_else(|| {
            SourceError::parse(format!("unexpected throttle output '{}'", output.trim()))
        })?;
    let digits = hex.trim_start_matches("0x").trim_start_matches("0X");

    let mask = u32::from_str_radix(digits, 16)
        .map_err(|_| SourceError::parse(format!("bad throttle mask '{}'", hex)))?;
    Ok(ThrottleState::from_bits(mask))
}
