//! Directory listing builder.
//!
//! Turns a raw directory scan into the ordered entry sequence the filetree
//! displays: one synthetic parent entry first (except at the filesystem
//! root), then real entries in OS listing order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::fs::dirfs::{self, FsError, Result};
use crate::fs::{formatter, icons};

/// Prefix marking an entry as hidden.
pub const HIDDEN_PREFIX: &str = ".";

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Display name, possibly prefixed with an icon glyph.
    pub name: String,
    /// Base file name without path or icon.
    pub short_name: String,
    /// Absolute path, resolved against the working directory at listing time.
    pub path: PathBuf,
    /// Extension including the leading dot; empty for directories.
    pub extension: String,
    pub is_directory: bool,
    /// Formatted mtime, permission string and human-readable size.
    pub status_line: String,
    /// Absolute path of the directory this entry belongs to.
    pub current_directory: PathBuf,
}

impl DirectoryEntry {
    pub fn is_parent(&self) -> bool {
        self.short_name == dirfs::PREVIOUS_DIRECTORY
    }
}

/// Builds the listing for `target` (a path or one of the `dirfs` sentinels)
/// and commits the working-directory change to the resolved path.
///
/// Returns `FsError::NotADirectory` when the resolved target is not a
/// directory; callers treat that as a no-op rather than a user-facing error.
/// The scan happens before the chdir so a failure leaves the previous
/// working directory and listing untouched.
pub fn build_listing(
    target: &str,
    show_hidden: bool,
    show_icons: bool,
) -> Result<Vec<DirectoryEntry>> {
    let directory = if target == dirfs::HOME_DIRECTORY {
        dirfs::resolve_home_directory()?
    } else {
        PathBuf::from(target)
    };

    let metadata = fs::metadata(&directory).map_err(|source| FsError::Io {
        op: "stat",
        source,
    })?;
    if !metadata.is_dir() {
        return Err(FsError::NotADirectory(directory));
    }

    let children = scan_directory(&directory, show_hidden)?;

    dirfs::change_working_directory(&directory)?;
    let working_directory = dirfs::working_directory()?;

    let mut entries = Vec::with_capacity(children.len() + 1);
    if working_directory.parent().is_some() {
        entries.push(parent_entry(&working_directory, show_icons));
    }
    for (file_name, metadata) in children {
        entries.push(build_entry(
            &working_directory,
            &file_name,
            &metadata,
            show_icons,
        ));
    }
    Ok(entries)
}

/// Scans a directory in OS listing order. Symbolic links are resolved to
/// their target's metadata; broken links fall back to the link itself.
fn scan_directory(directory: &Path, show_hidden: bool) -> Result<Vec<(String, fs::Metadata)>> {
    let reader = fs::read_dir(directory).map_err(|source| FsError::Io {
        op: "list directory",
        source,
    })?;

    let mut children = Vec::new();
    for item in reader {
        let item = item.map_err(|source| FsError::Io {
            op: "list directory",
            source,
        })?;
        let file_name = item.file_name().to_string_lossy().into_owned();
        if !show_hidden && file_name.starts_with(HIDDEN_PREFIX) {
            continue;
        }
        let metadata = match fs::metadata(item.path()) {
            Ok(metadata) => metadata,
            Err(_) => match fs::symlink_metadata(item.path()) {
                Ok(metadata) => metadata,
                Err(_) => continue,
            },
        };
        children.push((file_name, metadata));
    }
    Ok(children)
}

fn parent_entry(working_directory: &Path, show_icons: bool) -> DirectoryEntry {
    let name = if show_icons {
        format!("{} {}", icons::PARENT_ICON, dirfs::PREVIOUS_DIRECTORY)
    } else {
        dirfs::PREVIOUS_DIRECTORY.to_string()
    };

    DirectoryEntry {
        name,
        short_name: dirfs::PREVIOUS_DIRECTORY.to_string(),
        path: working_directory.join(dirfs::PREVIOUS_DIRECTORY),
        extension: String::new(),
        is_directory: true,
        status_line: String::new(),
        current_directory: working_directory.to_path_buf(),
    }
}

fn build_entry(
    working_directory: &Path,
    file_name: &str,
    metadata: &fs::Metadata,
    show_icons: bool,
) -> DirectoryEntry {
    let is_directory = metadata.is_dir();
    let extension = if is_directory {
        String::new()
    } else {
        Path::new(file_name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    };

    let name = if show_icons {
        format!(
            "{} {}",
            icons::icon_for(file_name, &extension, is_directory),
            file_name
        )
    } else {
        file_name.to_string()
    };

    let mtime = metadata
        .modified()
        .map(formatter::format_mtime)
        .unwrap_or_default();
    let status_line = format!(
        "{} {} {}",
        mtime,
        formatter::mode_string(metadata),
        formatter::human_size(metadata.len()),
    );

    DirectoryEntry {
        name,
        short_name: file_name.to_string(),
        path: working_directory.join(file_name),
        extension,
        is_directory,
        status_line,
        current_directory: working_directory.to_path_buf(),
    }
}
