// crates/domain/src/pattern.rs
use globset::{GlobBuilder, GlobMatcher};
use verify_output_shared_kernel::{DomainError, DomainResult};

/// Wrapper around a `globset` matcher applied to bare file names.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> DomainResult<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                details: e.kind().to_string(),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { original: pattern.to_string(), matcher: glob.compile_matcher() })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}

/// Static description of one expected artifact family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpec {
    pub label: &'static str,
    pub glob: &'static str,
    /// When the pattern misses, files with this extension are listed to help debugging.
    pub debug_extension: Option<&'static str>,
}

/// The artifacts the scraping pipeline leaves in its output directory, in report order.
pub const DEFAULT_PATTERNS: [PatternSpec; 4] = [
    PatternSpec { label: "basic events", glob: "01events_*.json", debug_extension: None },
    PatternSpec {
        label: "detailed competitions",
        glob: "02competiciones_detalladas_*.json",
        debug_extension: None,
    },
    PatternSpec {
        label: "processed participants",
        glob: "participantes_procesado_*.csv",
        debug_extension: Some("csv"),
    },
    PatternSpec {
        label: "complete participants",
        glob: "participants_completos_*.json",
        debug_extension: None,
    },
];

/// A compiled pattern ready to be checked against a directory snapshot.
#[derive(Debug, Clone)]
pub struct ExpectedPattern {
    label: String,
    glob: GlobPattern,
    debug_extension: Option<String>,
}

impl ExpectedPattern {
    pub fn new(label: impl Into<String>, glob: &str) -> DomainResult<Self> {
        Ok(Self { label: label.into(), glob: GlobPattern::new(glob)?, debug_extension: None })
    }

    #[must_use]
    pub fn with_debug_extension(mut self, ext: impl Into<String>) -> Self {
        self.debug_extension = Some(ext.into().trim_start_matches('.').to_ascii_lowercase());
        self
    }

    pub fn from_spec(spec: &PatternSpec) -> DomainResult<Self> {
        let pattern = Self::new(spec.label, spec.glob)?;
        Ok(match spec.debug_extension {
            Some(ext) => pattern.with_debug_extension(ext),
            None => pattern,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn glob(&self) -> &str {
        self.glob.pattern()
    }

    pub fn debug_extension(&self) -> Option<&str> {
        self.debug_extension.as_deref()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.glob.matches(name)
    }
}

/// Compiles [`DEFAULT_PATTERNS`] in order.
pub fn default_patterns() -> DomainResult<Vec<ExpectedPattern>> {
    DEFAULT_PATTERNS.iter().map(ExpectedPattern::from_spec).collect()
}
