//! The seam between the report and the machine.

use crate::sources;
use chrono::{DateTime, Local};
use nanosys_common::{
    CpuReading, EthernetLink, HostIdentity, MemoryReading, NetworkLinkState, PackageUpdateList,
    PingResult, Result, StorageReading, ThrottleState,
};

/// Every data source the report draws on, one call each per report.
///
/// [`LiveProbe`] reads the running system. Tests hand the assembler and the
/// HTTP layer a canned implementation instead.
pub trait SystemProbe: Send + Sync {
    /// Wall clock used for the "Updated" line.
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn host(&self) -> Result<HostIdentity>;
    fn distribution(&self) -> Result<String>;
    fn uptime_secs(&self) -> Result<u64>;
    fn throttle(&self) -> Result<ThrottleState>;
    fn core_volts(&self) -> Result<f64>;
    fn cpu(&self) -> Result<CpuReading>;
    fn memory(&self) -> Result<MemoryReading>;
    fn disks(&self) -> Result<Vec<StorageReading>>;
    fn wifi(&self) -> Result<NetworkLinkState>;
    fn ethernet(&self) -> Result<EthernetLink>;
    fn ping(&self) -> Result<PingResult>;
    fn journal(&self) -> Result<Vec<String>>;
    fn updates(&self) -> Result<PackageUpdateList>;
}

/// Reads the local machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveProbe;

impl SystemProbe for LiveProbe {
    fn host(&self) -> Result<HostIdentity> {
        sources::host::identity()
    }

    fn distribution(&self) -> Result<String> {
        sources::host::distribution()
    }

    fn uptime_secs(&self) -> Result<u64> {
        sources::uptime::read()
    }

    fn throttle(&self) -> Result<ThrottleState> {
        sources::power::throttle_state()
    }

    fn core_volts(&self) -> Result<f64> {
        sources::power::core_volts()
    }

    fn cpu(&self) -> Result<CpuReading> {
        sources::cpu::read()
    }

    fn memory(&self) -> Result<MemoryReading> {
        sources::memory::read()
    }

    fn disks(&self) -> Result<Vec<StorageReading>> {
        sources::disk::read()
    }

    fn wifi(&self) -> Result<NetworkLinkState> {
        sources::wifi::read()
    }

    fn ethernet(&self) -> Result<EthernetLink> {
        sources::ethernet::read()
    }

    fn ping(&self) -> Result<PingResult> {
        sources::ping::read()
    }

    fn journal(&self) -> Result<Vec<String>> {
        sources::journal::read()
    }

    fn updates(&self) -> Result<PackageUpdateList> {
        sources::packages::read()
    }
}
