//! Display formatting for listing metadata.

use std::fs::Metadata;
use std::time::SystemTime;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const SIZE_SUFFIXES: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

/// Converts a byte count to a short human-readable string: `999B`, `1.2K`,
/// `45M`, ... Decimal units, one fractional digit below 10.
pub fn human_size(size: u64) -> String {
    if size < 1000 {
        return format!("{}B", size);
    }

    let mut value = size as f64 / 1000.0;
    for suffix in SIZE_SUFFIXES {
        if value < 10.0 {
            return format!("{:.1}{}", value, suffix);
        }
        if value < 1000.0 {
            return format!("{}{}", value as u64, suffix);
        }
        value /= 1000.0;
    }
    format!("{}E", value as u64)
}

/// Unix-style mode string, `drwxr-xr-x`.
#[cfg(unix)]
pub fn mode_string(metadata: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    let mut out = String::with_capacity(10);
    out.push(if metadata.is_dir() { 'd' } else { '-' });
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

#[cfg(not(unix))]
pub fn mode_string(metadata: &Metadata) -> String {
    let kind = if metadata.is_dir() { 'd' } else { '-' };
    let write = if metadata.permissions().readonly() { '-' } else { 'w' };
    format!("{}r{}-r--r--", kind, write)
}

/// Formats a modification time as `2024-01-31 14:05:09` in local time,
/// falling back to UTC when the local offset cannot be determined.
pub fn format_mtime(modified: SystemTime) -> String {
    let datetime = OffsetDateTime::from(modified);
    let datetime = UtcOffset::current_local_offset()
        .map(|offset| datetime.to_offset(offset))
        .unwrap_or(datetime);

    let description =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    datetime.format(&description).unwrap_or_default()
}
