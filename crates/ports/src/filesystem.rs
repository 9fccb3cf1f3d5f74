// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use verify_output_shared_kernel::Result;

/// DTO representing a regular file discovered directly under the listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryDto {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    /// Unix mode bits (file type and permissions).
    pub mode: u32,
    pub mtime: Option<DateTime<Local>>,
}

/// Port for taking a flat, read-only snapshot of a directory.
pub trait DirectoryLister: Send + Sync {
    /// Lists regular files directly under `dir`, sorted by name.
    ///
    /// Fails with `InfrastructureError::DirectoryUnavailable` when `dir`
    /// is missing or cannot be read.
    fn list(&self, dir: &Path) -> Result<Vec<DirEntryDto>>;
}
