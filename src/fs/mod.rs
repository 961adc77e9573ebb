pub mod dirfs;
pub mod formatter;
pub mod icons;
pub mod listing;

pub use dirfs::FsError;
pub use listing::{build_listing, DirectoryEntry};
