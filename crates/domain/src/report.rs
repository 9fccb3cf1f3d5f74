// crates/domain/src/report.rs
use std::path::PathBuf;

use crate::model::{Candidate, Resolution};

/// Files sharing the debug extension of a pattern that missed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugListing {
    pub extension: String,
    pub files: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternOutcome {
    pub label: String,
    pub glob: String,
    pub resolution: Resolution,
    pub debug: Option<DebugListing>,
}

impl PatternOutcome {
    pub fn is_found(&self) -> bool {
        self.resolution.is_found()
    }
}

/// Contents of the base directory as seen at inspection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryListing {
    /// Regular files sorted by name.
    Listed(Vec<Candidate>),
    Unavailable { reason: String },
}

impl DirectoryListing {
    pub fn files(&self) -> &[Candidate] {
        match self {
            Self::Listed(files) => files,
            Self::Unavailable { .. } => &[],
        }
    }
}

/// Result of one verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub base_dir: PathBuf,
    pub outcomes: Vec<PatternOutcome>,
    pub listing: DirectoryListing,
}

impl VerificationReport {
    /// Number of patterns that resolved to no file.
    pub fn miss_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_found()).count()
    }

    pub fn is_success(&self) -> bool {
        self.miss_count() == 0
    }

    /// `0` when every pattern resolved, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.is_success())
    }
}
