// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;
use verify_output_domain::VerificationReport;
use verify_output_infra::LocalDirectoryLister;
use verify_output_usecase::{VerificationPlan, VerifyOutputs};

use crate::config::Config;
use crate::presentation;

/// Runs one verification pass and writes the checklist to `out`.
///
/// The returned report decides the exit code; errors are limited to invalid
/// built-in patterns and failures writing to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<VerificationReport> {
    let plan = VerificationPlan::with_default_patterns(&config.base_dir)
        .context("failed to compile expected patterns")?;
    info!(dir = %plan.base_dir.display(), patterns = plan.patterns.len(), "verifying output directory");

    let lister = LocalDirectoryLister::new();
    let report = VerifyOutputs::new(&lister).run(&plan);

    presentation::print_report(&report, out).context("failed to write report")?;
    Ok(report)
}
