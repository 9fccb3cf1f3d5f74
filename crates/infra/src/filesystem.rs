// crates/infra/src/filesystem.rs
use std::{
    fs::Metadata,
    io,
    path::Path,
};

use chrono::{DateTime, Local};
use ignore::WalkBuilder;
use tracing::{debug, warn};
use verify_output_ports::filesystem::{DirEntryDto, DirectoryLister};
use verify_output_shared_kernel::{InfrastructureError, Result};

/// Filesystem adapter implementing the `DirectoryLister` port.
///
/// Only the top level of the directory is inspected. Hidden entries and
/// anything that is not a regular file (after following symlinks) are left out.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalDirectoryLister;

impl LocalDirectoryLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalDirectoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<DirEntryDto>> {
        ensure_listable(dir)?;

        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .hidden(true)
            .follow_links(true)
            .max_depth(Some(1))
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            match std::fs::metadata(path) {
                Ok(meta) => entries.push(to_dto(path, &meta)),
                Err(err) => warn!(path = %path.display(), error = %err, "metadata unavailable"),
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(dir = %dir.display(), files = entries.len(), "directory listed");
        Ok(entries)
    }
}

fn ensure_listable(dir: &Path) -> Result<()> {
    let unavailable = |source: io::Error| InfrastructureError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    };
    let meta = std::fs::metadata(dir).map_err(unavailable)?;
    if !meta.is_dir() {
        return Err(unavailable(io::Error::other("not a directory")).into());
    }
    // Fail early on permission problems instead of yielding an empty walk.
    std::fs::read_dir(dir).map_err(unavailable)?;
    Ok(())
}

fn to_dto(path: &Path, meta: &Metadata) -> DirEntryDto {
    let name = path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    DirEntryDto {
        path: path.to_path_buf(),
        name,
        size: meta.len(),
        mode: mode_bits(meta),
        mtime: meta.modified().ok().map(DateTime::<Local>::from),
    }
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() { 0o100_444 } else { 0o100_644 }
}
