//! Core configuration types.
//! - Options holds the per-run switches with copy semantics as the default.
//! - LogLevel represents diagnostic verbosity with simple parsing helpers.

use std::fmt;
use std::str::FromStr;

/// Program-defined verbosity levels for diagnostics (not the per-file progress lines).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// One event per transfer plus run summary
    Info,
    /// Every candidate decision
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Switches for one collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Move files instead of copying them
    pub move_files: bool,
    /// Suppress the per-file "<Verb> <src> -> <dst>" lines
    pub quiet: bool,
    /// Report what would happen but do not touch the filesystem
    pub dry_run: bool,
    /// Carry timestamps and permissions over to copied files
    pub preserve_metadata: bool,
}

impl Options {
    /// Copy semantics, progress lines on, real run.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_move(mut self, move_files: bool) -> Self {
        self.move_files = move_files;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_preserve_metadata(mut self, preserve: bool) -> Self {
        self.preserve_metadata = preserve;
        self
    }
}
