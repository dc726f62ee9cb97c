//! Presentation model
//!
//! Every value here is built fresh for one report and dropped once the
//! report is rendered.

use chrono::{DateTime, Local};

/// Who we are: `uname` node name, kernel release and machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub hostname: String,
    pub kernel: String,
    pub arch: String,
}

/// Free/total bytes of a memory pool or filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageReading {
    pub label: String,
    pub free_bytes: u64,
    pub total_bytes: u64,
    pub percent_used: f64,
}

impl StorageReading {
    /// Derives the used percent from free and total, rounded to one decimal.
    pub fn from_usage(label: impl Into<String>, free_bytes: u64, total_bytes: u64) -> Self {
        let percent_used = if total_bytes > 0 {
            let used = total_bytes.saturating_sub(free_bytes) as f64;
            round1(used / total_bytes as f64 * 100.0)
        } else {
            0.0
        };

        Self {
            label: label.into(),
            free_bytes,
            total_bytes,
            percent_used,
        }
    }
}

/// RAM plus swap. Swap is `None` on machines without any.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryReading {
    pub ram: StorageReading,
    pub swap: Option<StorageReading>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CpuReading {
    /// Logical cores
    pub cores: usize,
    /// 1-minute load average
    pub load_one: f64,
    pub freq_mhz: Option<f64>,
    pub temp_celsius: Option<f64>,
}

impl CpuReading {
    /// 1-minute load as a percent of the logical core count.
    pub fn load_percent(&self) -> f64 {
        if self.cores == 0 {
            return 0.0;
        }
        round1(self.load_one / self.cores as f64 * 100.0)
    }
}

/// One condition reported by the board firmware throttle mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThrottleFlag {
    Undervolted,
    FrequencyCapped,
    Throttled,
    SoftTemperatureLimit,
}

impl ThrottleFlag {
    pub const ALL: [ThrottleFlag; 4] = [
        ThrottleFlag::Undervolted,
        ThrottleFlag::FrequencyCapped,
        ThrottleFlag::Throttled,
        ThrottleFlag::SoftTemperatureLimit,
    ];

    /// Bit position within a group (0..=3).
    pub fn bit(self) -> u32 {
        match self {
            ThrottleFlag::Undervolted => 0,
            ThrottleFlag::FrequencyCapped => 1,
            ThrottleFlag::Throttled => 2,
            ThrottleFlag::SoftTemperatureLimit => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThrottleFlag::Undervolted => "undervolted",
            ThrottleFlag::FrequencyCapped => "frequency capped",
            ThrottleFlag::Throttled => "throttled",
            ThrottleFlag::SoftTemperatureLimit => "soft temperature limit",
        }
    }
}

/// Decoded throttle mask. Bits 0-3 describe now, bits 16-19 the same
/// conditions at any point since boot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThrottleState {
    pub current: Vec<ThrottleFlag>,
    pub previous: Vec<ThrottleFlag>,
}

impl ThrottleState {
    const PREVIOUS_SHIFT: u32 = 16;

    pub fn from_bits(mask: u32) -> Self {
        let pick = |shift: u32| {
            ThrottleFlag::ALL
                .into_iter()
                .filter(|flag| mask & (1 << (flag.bit() + shift)) != 0)
                .collect::<Vec<_>>()
        };

        Self {
            current: pick(0),
            previous: pick(Self::PREVIOUS_SHIFT),
        }
    }

    pub fn is_clear(&self) -> bool {
        self.current.is_empty() && self.previous.is_empty()
    }

    /// One line per non-empty group, e.g. `currently: undervolted, throttled`.
    pub fn warning_lines(&self) -> Vec<String> {
        let join = |flags: &[ThrottleFlag]| {
            flags
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut lines = Vec::new();
        if !self.current.is_empty() {
            lines.push(format!("currently: {}", join(&self.current)));
        }
        if !self.previous.is_empty() {
            lines.push(format!("previously: {}", join(&self.previous)));
        }
        lines
    }
}

/// `x/y` link quality as reported by the wireless tools.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkQuality {
    pub numerator: f64,
    pub denominator: f64,
}

impl LinkQuality {
    pub fn percent(&self) -> f64 {
        round1(self.numerator / self.denominator * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WifiLink {
    pub essid: String,
    pub bitrate: String,
    pub quality: LinkQuality,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NetworkLinkState {
    Disconnected,
    Connected(WifiLink),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EthernetLink {
    NotConnected,
    Connected {
        interface: String,
        /// Mb/s; `None` when the driver does not report it
        speed_mbps: Option<u32>,
    },
}

/// Summary of a short echo burst.
#[derive(Debug, Clone, PartialEq)]
pub struct PingResult {
    pub target: String,
    pub sent: u32,
    pub received: u32,
    /// Average round trip in ms, verbatim from the tool. `None` when no echo
    /// came back.
    pub avg_rtt_ms: Option<String>,
}

impl PingResult {
    /// Percent of echoes lost, the badness fed to the classifier.
    pub fn loss_percent(&self) -> f64 {
        if self.sent == 0 {
            return 100.0;
        }
        100.0 - f64::from(self.received) / f64::from(self.sent) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUpdate {
    pub name: String,
    pub version_info: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageUpdateList {
    pub updates: Vec<PackageUpdate>,
    /// Modification time of the package cache, used as "last checked"
    pub last_checked: Option<DateTime<Local>>,
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
