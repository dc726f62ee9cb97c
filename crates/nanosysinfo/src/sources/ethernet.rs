//! Wired link state from sysfs.

use super::read_trimmed;
use nanosys_common::{EthernetLink, Result};
use std::fs;
use std::path::Path;

pub const SYS_CLASS_NET: &str = "/sys/class/net";

const IFF_UP: u32 = 0x1;

pub fn read() -> Result<EthernetLink> {
    link_in(Path::new(SYS_CLASS_NET))
}

/// First interface, in name order, that is administratively up and reports
/// a known duplex mode.
pub fn link_in(root: &Path) -> Result<EthernetLink> {
    let mut names: Vec<String> = fs::read_dir(root)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    for name in names {
        let dir = root.join(&name);
        if !is_up(&dir) {
            continue;
        }

        // Reading duplex fails outright on wireless and loopback devices.
        let duplex = read_trimmed(&dir.join("duplex")).unwrap_or_default();
        if duplex != "full" && duplex != "half" {
            continue;
        }

        let speed_mbps = read_trimmed(&dir.join("speed"))
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .and_then(|s| u32::try_from(s).ok())
            .filter(|s| *s > 0);

        return Ok(EthernetLink::Connected {
            interface: name,
            speed_mbps,
        });
    }

    Ok(EthernetLink::NotConnected)
}

fn is_up(dir: &Path) -> bool {
    read_trimmed(&dir.join("flags"))
        .ok()
        .and_then(|flags| u32::from_str_radix(flags.trim_start_matches("0x"), 16).ok())
        .map(|flags| flags & IFF_UP != 0)
        .unwrap_or(false)
}
