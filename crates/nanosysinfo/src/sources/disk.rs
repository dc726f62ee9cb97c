//! Usage of the real, mounted filesystems.

use nanosys_common::{Result, StorageReading};
use sysinfo::Disks;

/// Filesystem types that never describe a physical device.
const VIRTUAL_FILESYSTEMS: &[&str] = &[
    "tmpfs", "devtmpfs", "ramfs", "squashfs", "overlay", "proc", "sysfs", "devpts", "cgroup",
    "cgroup2", "autofs", "fuse.portal",
];

/// One row of the mount table as the stats provider reports it.
#[derive(Debug, Clone)]
pub struct MountEntry {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
    pub available: u64,
    pub total: u64,
}

pub fn read() -> Result<Vec<StorageReading>> {
    let disks = Disks::new_with_refreshed_list();
    let entries = disks
        .list()
        .iter()
        .map(|disk| MountEntry {
            device: disk.name().to_string_lossy().into_owned(),
            mount_point: disk.mount_point().to_string_lossy().into_owned(),
            fs_type: disk.file_system().to_string_lossy().into_owned(),
            available: disk.available_space(),
            total: disk.total_space(),
        })
        .collect();

    Ok(select_mounts(entries))
}

pub fn is_real_device(entry: &MountEntry) -> bool {
    entry.device.starts_with("/dev/")
        && !entry.device.starts_with("/dev/loop")
        && !VIRTUAL_FILESYSTEMS.contains(&entry.fs_type.as_str())
        && entry.total > 0
}

/// Real devices only, sorted by device path, one reading per device. A
/// device mounted more than once is reported at its first mount point in
/// sort order.
pub fn select_mounts(mut entries: Vec<MountEntry>) -> Vec<StorageReading> {
    entries.retain(is_real_device);
    entries.sort_by(|a, b| {
        a.device
            .cmp(&b.device)
            .then_with(|| a.mount_point.cmp(&b.mount_point))
    });
    entries.dedup_by(|next, kept| next.device == kept.device);

    entries
        .into_iter()
        .map(|e| {
            StorageReading::from_usage(format!("Disk {}", e.mount_point), e.available, e.total)
        })
        .collect()
}
