//! Filesystem access layer for the navigator.
//!
//! Every operation here is synchronous and individually atomic at the OS
//! level; callers run them inside spawned effects so the update loop never
//! blocks on I/O.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Sentinel for the directory the process is currently in.
pub const CURRENT_DIRECTORY: &str = ".";
/// Sentinel for the parent of the current directory.
pub const PREVIOUS_DIRECTORY: &str = "..";
/// Sentinel resolved to the user's home directory before use.
pub const HOME_DIRECTORY: &str = "~";
/// Sentinel for the filesystem root.
pub const ROOT_DIRECTORY: &str = "/";

pub type Result<T> = std::result::Result<T, FsError>;

/// Error taxonomy for the access layer. Everything except `NotADirectory`
/// surfaces to the user as an error-styled status banner; `NotADirectory`
/// is a silent no-op upstream.
#[derive(Debug)]
pub enum FsError {
    NotADirectory(PathBuf),
    Io {
        op: &'static str,
        source: io::Error,
    },
    Zip(String),
    Clipboard(String),
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADirectory(path) => write!(f, "{} is not a directory", path.display()),
            Self::Io { op, source } => write!(f, "{} failed: {}", op, source),
            Self::Zip(msg) => write!(f, "archive error: {}", msg),
            Self::Clipboard(msg) => write!(f, "clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn io_err(op: &'static str) -> impl FnOnce(io::Error) -> FsError {
    move |source| FsError::Io { op, source }
}

/// Resolves the user's home directory.
pub fn resolve_home_directory() -> Result<PathBuf> {
    dirs::home_dir().ok_or(FsError::Io {
        op: "resolve home directory",
        source: io::Error::new(io::ErrorKind::NotFound, "home directory not set"),
    })
}

pub fn working_directory() -> Result<PathBuf> {
    env::current_dir().map_err(io_err("get working directory"))
}

pub fn change_working_directory(path: &Path) -> Result<()> {
    env::set_current_dir(path).map_err(io_err("change directory"))
}

/// Creates an empty file. Fails if a file with that name already exists.
pub fn create_file(name: &str) -> Result<()> {
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(name)
        .map(|_| ())
        .map_err(io_err("create file"))
}

pub fn create_directory(name: &str) -> Result<()> {
    fs::create_dir_all(name).map_err(io_err("create directory"))
}

/// Deletes a file or a directory tree, whichever the path points at.
pub fn delete_item(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(io_err("stat"))?;
    if metadata.is_dir() {
        fs::remove_dir_all(path).map_err(io_err("delete directory"))
    } else {
        fs::remove_file(path).map_err(io_err("delete file"))
    }
}

/// Renames an item in place, keeping it inside its parent directory.
pub fn rename_item(path: &Path, new_name: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new(ROOT_DIRECTORY));
    fs::rename(path, parent.join(new_name)).map_err(io_err("rename"))
}

/// Moves an item to a new absolute path via rename(2). A cross-device move
/// fails rather than silently degrading to copy-and-delete.
pub fn move_item(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(io_err("move"))
}

/// Copies a file or directory tree to a `_copy`-suffixed sibling.
pub fn copy_item(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(io_err("stat"))?;
    if metadata.is_dir() {
        copy_directory(path)
    } else {
        copy_file(path)
    }
}

fn copy_file(path: &Path) -> Result<()> {
    fs::copy(path, copy_target(path)).map(|_| ()).map_err(io_err("copy file"))
}

fn copy_directory(path: &Path) -> Result<()> {
    let target_root = copy_target(path);
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|e| FsError::Io {
            op: "walk directory",
            source: e.into(),
        })?;
        let relative = entry.path().strip_prefix(path).unwrap_or(entry.path());
        let target = target_root.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_err("copy directory"))?;
        } else {
            fs::copy(entry.path(), &target).map_err(io_err("copy file"))?;
        }
    }
    Ok(())
}

/// Sibling name a copy lands at: `a.txt` -> `a_copy.txt`, `dir` -> `dir_copy`.
fn copy_target(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_copy.{}", stem, ext.to_string_lossy()),
        None => format!("{}_copy", stem),
    };
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Archives a file or directory tree into a sibling `<name>.zip`.
pub fn zip_item(path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let archive_path = match path.parent() {
        Some(parent) => parent.join(format!("{}.zip", name)),
        None => PathBuf::from(format!("{}.zip", name)),
    };

    let out = fs::File::create(&archive_path).map_err(io_err("create archive"))?;
    let mut writer = zip::ZipWriter::new(out);
    let options = zip::write::SimpleFileOptions::default();

    let metadata = fs::metadata(path).map_err(io_err("stat"))?;
    if metadata.is_dir() {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for entry in WalkDir::new(path) {
            let entry = entry.map_err(|e| FsError::Zip(e.to_string()))?;
            let relative = entry
                .path()
                .strip_prefix(base)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .into_owned();
            if entry.file_type().is_dir() {
                writer
                    .add_directory(relative, options)
                    .map_err(|e| FsError::Zip(e.to_string()))?;
            } else {
                writer
                    .start_file(relative, options)
                    .map_err(|e| FsError::Zip(e.to_string()))?;
                let mut file = fs::File::open(entry.path()).map_err(io_err("read file"))?;
                io::copy(&mut file, &mut writer).map_err(io_err("write archive"))?;
            }
        }
    } else {
        writer
            .start_file(name, options)
            .map_err(|e| FsError::Zip(e.to_string()))?;
        let mut file = fs::File::open(path).map_err(io_err("read file"))?;
        io::copy(&mut file, &mut writer).map_err(io_err("write archive"))?;
    }

    writer.finish().map_err(|e| FsError::Zip(e.to_string()))?;
    Ok(())
}

/// Extracts an archive into a sibling directory named after its stem.
pub fn unzip_item(path: &Path) -> Result<()> {
    let file = fs::File::open(path).map_err(io_err("open archive"))?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| FsError::Zip(e.to_string()))?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let destination = match path.parent() {
        Some(parent) => parent.join(stem),
        None => PathBuf::from(stem),
    };

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| FsError::Zip(e.to_string()))?;
        // Entries with paths escaping the destination are skipped.
        let Some(relative) = entry.enclosed_name() else {
            continue;
        };
        let target = destination.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(io_err("extract directory"))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(io_err("extract directory"))?;
            }
            let mut out = fs::File::create(&target).map_err(io_err("extract file"))?;
            io::copy(&mut entry, &mut out).map_err(io_err("extract file"))?;
        }
    }
    Ok(())
}
