//! Core library for `rcopy`.
//!
//! Collects files whose names match a shell-style pattern from a directory tree into
//! one flat destination directory. Name collisions are resolved by inserting an
//! increasing index before the extension: `a.txt`, `a(1).txt`, `a(2).txt`, ...
//!
//! Layout:
//! - `fs_ops::sequence`: candidate filenames for one base name
//! - `fs_ops::transfer`: copy/move one file to one exact path, never overwriting
//! - `collect`: the bottom-up walk tying both together
//! - `config`, `pattern`, `errors`: options, matching and validation for front ends

pub mod cli;
pub mod collect;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod pattern;
pub mod shutdown;

pub use collect::{RunSummary, collect, collect_matching, collect_with};
pub use config::{LogLevel, Options, validate_paths};
pub use errors::RcopyError;
pub use fs_ops::{TransferKind, TransferResult, sequence, sequence_bounded, transfer};
pub use pattern::FilePattern;
