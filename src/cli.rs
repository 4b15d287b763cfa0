//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Quote PATTERN so the shell does not expand it before rcopy sees it.
//! - --debug is a shorthand for --log-level debug.
//! - --log-level/--json/--log-file only affect diagnostics; progress lines are
//!   controlled by --quiet.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{LogLevel, Options};

/// Copy files recursively from a directory tree into one common folder.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rcopy",
    author,
    version,
    about = "Copy files recursively from a dirtree to a common folder"
)]
pub struct Args {
    /// The filename pattern (shell glob: *, ?, [...]).
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// The source directory; traversed recursively.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// The destination directory; must already exist.
    #[arg(value_name = "DESTINATION", value_hint = ValueHint::DirPath)]
    pub destination: PathBuf,

    /// Move instead of copy.
    #[arg(short = 'm', long = "move")]
    pub move_files: bool,

    /// Do not actually copy or move the files.
    #[arg(short = 'n', long = "dryrun", visible_alias = "dry-run")]
    pub dry_run: bool,

    /// No output on console.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Carry permissions and timestamps over to copied files.
    #[arg(long)]
    pub preserve_metadata: bool,

    /// Enable debug diagnostics (shorthand for --log-level debug).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Diagnostic level: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Emit diagnostics as structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Also append diagnostics to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Run options derived from the flags.
    pub fn options(&self) -> Options {
        Options::new()
            .with_move(self.move_files)
            .with_quiet(self.quiet)
            .with_dry_run(self.dry_run)
            .with_preserve_metadata(self.preserve_metadata)
    }

    /// Effective diagnostic level.
    /// Precedence: --debug > --log-level value > default (normal).
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level.clone().unwrap_or_default()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
