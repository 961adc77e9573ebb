//! A terminal filetree for browsing and reshaping directories.
//!
//! The `app` module holds the Elm-style message loop and widgets; the `fs`
//! module holds the listing and mutation primitives it drives.

pub mod app;
pub mod fs;

pub use app::{FiletreeConfig, Program};
pub use fs::{build_listing, DirectoryEntry, FsError};
