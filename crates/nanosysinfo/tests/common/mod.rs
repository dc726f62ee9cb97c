//! Canned probe shared by the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use nanosys_common::{
    CpuReading, EthernetLink, HostIdentity, LinkQuality, MemoryReading, NetworkLinkState,
    PackageUpdate, PackageUpdateList, PingResult, Result, SourceError, StorageReading,
    ThrottleState, WifiLink,
};
use nanosysinfo::SystemProbe;

const GIB: u64 = 1 << 30;

/// A Raspberry Pi that is online, a little busy and has two pending updates.
pub struct FakeProbe {
    pub throttle_mask: Option<u32>,
    pub journal: Vec<String>,
}

impl Default for FakeProbe {
    fn default() -> Self {
        Self {
            throttle_mask: None,
            journal: vec![
                "Oct 17 09:00:01 pi CRON[812]: (root) CMD (run-parts /etc/cron.hourly)".to_string(),
                "Oct 17 09:12:44 pi kernel: <usb 1-1.2> new device".to_string(),
            ],
        }
    }
}

impl FakeProbe {
    pub fn throttled(mask: u32) -> Self {
        Self {
            throttle_mask: Some(mask),
            ..Default::default()
        }
    }
}

impl SystemProbe for FakeProbe {
    fn now(&self) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    fn host(&self) -> Result<HostIdentity> {
        Ok(HostIdentity {
            hostname: "pi".to_string(),
            kernel: "6.6.51+rpt-rpi-v8".to_string(),
            arch: "aarch64".to_string(),
        })
    }

    fn distribution(&self) -> Result<String> {
        Ok("Debian GNU/Linux 12 (bookworm)".to_string())
    }

    fn uptime_secs(&self) -> Result<u64> {
        Ok(90_061)
    }

    fn throttle(&self) -> Result<ThrottleState> {
        self.throttle_mask
            .map(ThrottleState::from_bits)
            .ok_or_else(|| SourceError::Unavailable("vcgencmd".to_string()))
    }

    fn core_volts(&self) -> Result<f64> {
        Ok(0.85)
    }

    fn cpu(&self) -> Result<CpuReading> {
        Ok(CpuReading {
            cores: 4,
            load_one: 2.4,
            freq_mhz: Some(1500.0),
            temp_celsius: Some(48.3),
        })
    }

    fn memory(&self) -> Result<MemoryReading> {
        Ok(MemoryReading {
            ram: StorageReading::from_usage("Memory", GIB, 4 * GIB),
            swap: None,
        })
    }

    fn disks(&self) -> Result<Vec<StorageReading>> {
        Ok(vec![
            StorageReading::from_usage("Disk /", 20 * GIB, 32 * GIB),
            StorageReading::from_usage("Disk /boot/firmware", GIB / 2, GIB),
        ])
    }

    fn wifi(&self) -> Result<NetworkLinkState> {
        Ok(NetworkLinkState::Connected(WifiLink {
            essid: "home".to_string(),
            bitrate: "72.2 Mb/s".to_string(),
            quality: LinkQuality {
                numerator: 56.0,
                denominator: 70.0,
            },
        }))
    }

    fn ethernet(&self) -> Result<EthernetLink> {
        Ok(EthernetLink::NotConnected)
    }

    fn ping(&self) -> Result<PingResult> {
        Ok(PingResult {
            target: "8.8.8.8".to_string(),
            sent: 5,
            received: 5,
            avg_rtt_ms: Some("14.210".to_string()),
        })
    }

    fn journal(&self) -> Result<Vec<String>> {
        Ok(self.journal.clone())
    }

    fn updates(&self) -> Result<PackageUpdateList> {
        Ok(PackageUpdateList {
            updates: vec![
                PackageUpdate {
                    name: "openssl".to_string(),
                    version_info: "bookworm-security 3.0.15-1~deb12u1 arm64".to_string(),
                },
                PackageUpdate {
                    name: "tzdata".to_string(),
                    version_info: "stable-updates 2026a-0+deb12u1 all".to_string(),
                },
            ],
            last_checked: None,
        })
    }
}
