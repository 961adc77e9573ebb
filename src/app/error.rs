//! Application-level error handling.
//!
//! Filesystem errors carry their own type ([`crate::fs::dirfs::FsError`])
//! and surface to the user as status banners. Everything that escapes the
//! message loop is an eyre report.

/// Result type alias for application operations
pub type Result<T> = eyre::Result<T>;

/// Installs color-eyre hooks for panic and error reports.
pub fn install_hooks() -> Result<()> {
    color_eyre::install()
}
