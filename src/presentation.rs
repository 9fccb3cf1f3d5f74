// src/presentation.rs
use std::io::{self, Write};

use verify_output_domain::{
    Candidate, DebugListing, DirectoryListing, PatternOutcome, Resolution, VerificationReport,
};

const RULE: &str = "==================================================";

/// Writes the human-readable checklist for one verification pass.
pub fn print_report(report: &VerificationReport, out: &mut impl Write) -> io::Result<()> {
    let dir = report.base_dir.display().to_string();
    writeln!(out, "🔍 Verifying generated files in {dir}")?;
    writeln!(out, "{RULE}")?;

    for outcome in &report.outcomes {
        print_outcome(outcome, &dir, out)?;
    }

    let missing = report.miss_count();
    if missing > 0 {
        writeln!(out)?;
        writeln!(out, "❌ {missing} expected file(s) missing. Contents of {dir}:")?;
        print_listing(&report.listing, out)?;
    }

    writeln!(out, "{RULE}")?;
    let total = report.outcomes.len();
    if missing == 0 {
        writeln!(out, "✅ Verification passed: all {total} expected files present")?;
    } else {
        writeln!(out, "❌ Verification failed: {missing} of {total} expected files missing")?;
    }
    out.flush()
}

fn print_outcome(outcome: &PatternOutcome, dir: &str, out: &mut impl Write) -> io::Result<()> {
    match &outcome.resolution {
        Resolution::Found(file) => {
            writeln!(out, "✅ {} ({})", outcome.glob, outcome.label)?;
            writeln!(out, "   {}", long_listing(file))?;
        }
        Resolution::Missing => {
            writeln!(out, "❌ {} ({}): no matching file", outcome.glob, outcome.label)?;
        }
    }
    if let Some(debug) = &outcome.debug {
        print_debug_listing(debug, dir, out)?;
    }
    Ok(())
}

fn print_debug_listing(debug: &DebugListing, dir: &str, out: &mut impl Write) -> io::Result<()> {
    if debug.files.is_empty() {
        return writeln!(out, "   no .{} files in {dir}", debug.extension);
    }
    writeln!(out, "   .{} files in {dir}:", debug.extension)?;
    for file in &debug.files {
        writeln!(out, "     {}", long_listing(file))?;
    }
    Ok(())
}

fn print_listing(listing: &DirectoryListing, out: &mut impl Write) -> io::Result<()> {
    match listing {
        DirectoryListing::Unavailable { reason } => {
            writeln!(out, "   (directory could not be listed: {reason})")
        }
        DirectoryListing::Listed(files) if files.is_empty() => writeln!(out, "   (directory is empty)"),
        DirectoryListing::Listed(files) => {
            for file in files {
                writeln!(out, "   {} - {} bytes", file.name, file.size)?;
            }
            Ok(())
        }
    }
}

/// `ls -l` style line: permissions, size, modification time and path.
pub fn long_listing(file: &Candidate) -> String {
    let mtime = file.mtime.map_or_else(|| "-".to_string(), |t| t.to_string());
    format!("{} {:>10} {} {}", file.mode, file.size, mtime, file.path.display())
}
