// src/config.rs
use crate::args::Args;
use std::path::PathBuf;

/// Diagnostics verbosity for the stderr log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl From<u8> for LogLevel {
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::Warn,
            1 => Self::Info,
            _ => Self::Debug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: PathBuf,
    pub log_level: LogLevel,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { base_dir: args.dir, log_level: LogLevel::from(args.verbose) }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { base_dir: PathBuf::from(crate::args::DEFAULT_OUTPUT_DIR), log_level: LogLevel::Warn }
    }
}
