//! Common test utilities.
//!
//! Listings commit a working-directory change, and the working directory is
//! process-global, so every test that lists or mutates takes [`cwd_lock`]
//! first.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

use tempfile::TempDir;

static CWD_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serializes tests that touch the process working directory.
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A scratch directory that is deleted when dropped. The path is
/// canonicalized so it can be compared against listing output.
pub struct Scratch {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn scratch() -> Scratch {
    let dir = TempDir::new().expect("failed to create scratch directory");
    let path = dir.path().canonicalize().expect("failed to canonicalize");
    Scratch { _dir: dir, path }
}

pub fn touch(path: &Path) {
    fs::write(path, b"scratch contents").expect("failed to write scratch file");
}

pub fn mkdir(path: &Path) {
    fs::create_dir(path).expect("failed to create scratch subdirectory");
}
