use std::path::PathBuf;

use tracing::{debug, info, warn};
use verify_output_domain::{
    Candidate, DebugListing, DirectoryListing, ExpectedPattern, PatternOutcome, Resolution,
    VerificationReport, default_patterns, select_latest,
};
use verify_output_ports::filesystem::{DirEntryDto, DirectoryLister};
use verify_output_shared_kernel::{DomainResult, FileMode, FileSize};

/// What to check and where.
#[derive(Debug, Clone)]
pub struct VerificationPlan {
    pub base_dir: PathBuf,
    pub patterns: Vec<ExpectedPattern>,
}

impl VerificationPlan {
    pub fn new(base_dir: impl Into<PathBuf>, patterns: Vec<ExpectedPattern>) -> Self {
        Self { base_dir: base_dir.into(), patterns }
    }

    /// Plan over the built-in artifact patterns.
    pub fn with_default_patterns(base_dir: impl Into<PathBuf>) -> DomainResult<Self> {
        Ok(Self::new(base_dir, default_patterns()?))
    }
}

pub struct VerifyOutputs<'a> {
    lister: &'a dyn DirectoryLister,
}

impl<'a> VerifyOutputs<'a> {
    pub fn new(lister: &'a dyn DirectoryLister) -> Self {
        Self { lister }
    }

    /// Takes one snapshot of the base directory and resolves every pattern against it.
    ///
    /// A directory that cannot be listed is not an error: every pattern is
    /// reported missing and the listing records why.
    pub fn run(&self, plan: &VerificationPlan) -> VerificationReport {
        let listing = match self.lister.list(&plan.base_dir) {
            Ok(entries) => DirectoryListing::Listed(entries.into_iter().map(dto_to_candidate).collect()),
            Err(err) => {
                warn!(dir = %plan.base_dir.display(), error = %err, "output directory unavailable");
                DirectoryListing::Unavailable { reason: err.to_string() }
            }
        };

        let outcomes = plan.patterns.iter().map(|p| resolve(p, listing.files())).collect();
        let report = VerificationReport { base_dir: plan.base_dir.clone(), outcomes, listing };
        info!(
            dir = %report.base_dir.display(),
            patterns = report.outcomes.len(),
            missing = report.miss_count(),
            "verification finished"
        );
        report
    }
}

fn resolve(pattern: &ExpectedPattern, files: &[Candidate]) -> PatternOutcome {
    let latest = select_latest(files.iter().filter(|c| pattern.matches(&c.name)));
    let resolution = match latest {
        Some(candidate) => {
            debug!(glob = pattern.glob(), file = %candidate.path.display(), "pattern resolved");
            Resolution::Found(candidate.clone())
        }
        None => {
            debug!(glob = pattern.glob(), "pattern unresolved");
            Resolution::Missing
        }
    };

    let debug_listing = match (&resolution, pattern.debug_extension()) {
        (Resolution::Missing, Some(ext)) => Some(DebugListing {
            extension: ext.to_string(),
            files: files.iter().filter(|c| c.has_extension(ext)).cloned().collect(),
        }),
        _ => None,
    };

    PatternOutcome {
        label: pattern.label().to_string(),
        glob: pattern.glob().to_string(),
        resolution,
        debug: debug_listing,
    }
}

fn dto_to_candidate(entry: DirEntryDto) -> Candidate {
    Candidate {
        path: entry.path,
        name: entry.name,
        size: FileSize::new(entry.size),
        mode: FileMode::new(entry.mode),
        mtime: entry.mtime.map(Into::into),
    }
}
