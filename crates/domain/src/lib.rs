//! # Domain
//!
//! Expected artifact patterns, candidate files and the verification report.
//!
//! - [`pattern`]: glob patterns the output directory must satisfy
//! - [`model`]: candidate files and latest-file resolution
//! - [`report`]: per-pattern outcomes and the run summary

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod pattern;
pub mod report;

pub use model::{Candidate, Resolution, select_latest};
pub use pattern::{DEFAULT_PATTERNS, ExpectedPattern, GlobPattern, PatternSpec, default_patterns};
pub use report::{DebugListing, DirectoryListing, PatternOutcome, VerificationReport};
