//! Metric sources
//!
//! One module per data source. Each exposes a `read`-style entry point that
//! touches the machine, plus pure parsers so the text handling can be tested
//! without the tool or file being present. Sources return errors as they
//! are; deciding what a miss means for the report is the assembler's job.

pub mod cpu;
pub mod disk;
pub mod ethernet;
pub mod host;
pub mod journal;
pub mod memory;
pub mod packages;
pub mod ping;
pub mod power;
pub mod uptime;
pub mod wifi;

use nanosys_common::Result;
use std::fs;
use std::path::Path;

/// Read a pseudo-file and trim the trailing newline.
pub(crate) fn read_trimmed(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?.trim().to_string())
}
