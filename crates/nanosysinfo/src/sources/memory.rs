//! RAM and swap usage.

use nanosys_common::{MemoryReading, Result, SourceError, StorageReading};
use sysinfo::System;

pub fn read() -> Result<MemoryReading> {
    let mut sys = System::new();
    sys.refresh_memory();

    reading_from(
        sys.total_memory(),
        sys.available_memory(),
        sys.total_swap(),
        sys.free_swap(),
    )
}

/// Builds the reading from raw byte counts. Zero total RAM means the
/// provider could not read anything.
pub fn reading_from(
    total: u64,
    available: u64,
    swap_total: u64,
    swap_free: u64,
) -> Result<MemoryReading> {
    if total == 0 {
        return Err(SourceError::Unavailable(
            "memory statistics not available".to_string(),
        ));
    }

    let ram = StorageReading::from_usage("Memory", available, total);
    let swap = (swap_total > 0).then(|| StorageReading::from_usage("Swap", swap_free, swap_total));

    Ok(MemoryReading { ram, swap })
}
