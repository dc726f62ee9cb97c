//! nanosys_common - shared types for nanosysinfo
//!
//! Holds the presentation model, the style themes and the pure formatting
//! helpers. Nothing in here touches the machine; the collectors live in the
//! `nanosysinfo` crate.

pub mod error;
pub mod format;
pub mod model;
pub mod severity;
pub mod theme;

pub use error::{Result, SourceError};
pub use format::{format_duration, gigabytes, Section, HEADING_WIDTH};
pub use model::{
    CpuReading, EthernetLink, HostIdentity, LinkQuality, MemoryReading, NetworkLinkState,
    PackageUpdate, PackageUpdateList, PingResult, StorageReading, ThrottleFlag, ThrottleState,
    WifiLink,
};
pub use severity::{percent_token, Severity};
pub use theme::{AnsiTheme, HtmlTheme, Theme, ThemeKind, Token};
