// crates/domain/src/model.rs
use std::path::PathBuf;

use verify_output_shared_kernel::{FileMode, FileSize, ModificationTime};

/// A regular file found directly under the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: String,
    pub size: FileSize,
    pub mode: FileMode,
    pub mtime: Option<ModificationTime>,
}

impl Candidate {
    /// Case-sensitive, like a shell `*.ext` glob.
    pub fn has_extension(&self, ext: &str) -> bool {
        self.path.extension().is_some_and(|e| e == ext)
    }
}

/// Outcome of resolving one pattern against the directory snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Candidate),
    Missing,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Picks the candidate with the newest modification time.
///
/// Entries without a readable mtime rank below every timestamped entry.
/// Among equal timestamps the last one in iteration order wins; callers must
/// not rely on which.
pub fn select_latest<'a, I>(candidates: I) -> Option<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates.into_iter().max_by_key(|c| c.mtime)
}
