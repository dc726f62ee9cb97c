//! CPU load, clock and temperature.

use super::read_trimmed;
use nanosys_common::{CpuReading, Result, SourceError};
use std::path::Path;
use sysinfo::System;
use tracing::debug;

pub const FREQ_PATH: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_cur_freq";
pub const TEMP_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Load and core count are required. Clock and temperature are read when the
/// pseudo-files exist; VMs and containers usually lack both.
pub fn read() -> Result<CpuReading> {
    let cores = num_cpus::get();
    let load = System::load_average();

    let freq_mhz = read_scaled(Path::new(FREQ_PATH))
        .map_err(|e| debug!("No CPU frequency: {}", e))
        .ok();
    let temp_celsius = read_scaled(Path::new(TEMP_PATH))
        .map_err(|e| debug!("No CPU temperature: {}", e))
        .ok();

    Ok(CpuReading {
        cores,
        load_one: load.one,
        freq_mhz,
        temp_celsius,
    })
}

/// Read a pseudo-file holding an integer in thousandths (kHz, millidegrees)
/// and return the value in units, one decimal.
pub fn read_scaled(path: &Path) -> Result<f64> {
    parse_thousandths(&read_trimmed(path)?)
}

pub fn parse_thousandths(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SourceError::parse(format!("not a number: '{}'", raw.trim())))?;
    Ok((value / 1000.0 * 10.0).round() / 10.0)
}
