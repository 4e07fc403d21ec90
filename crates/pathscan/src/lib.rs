//! Pathscan - media file discovery for remote test assets
//!
//! Walks a directory tree for image and audio files and describes each one
//! by its relative path and the URL it is served from.

pub mod config;
pub mod error;
pub mod manifest;
pub mod scanner;

pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use manifest::{FileEntry, Manifest};
pub use scanner::{build_entries, scan_files, to_url_path};
