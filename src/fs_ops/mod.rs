//! Filesystem operations: candidate naming and the single-file transfer primitive.

mod atomic;
pub mod helpers;
mod io_copy;
mod metadata;
pub mod sequence;
mod transfer;

pub use sequence::{Candidate, FilenameSequence, candidate_name, sequence, sequence_bounded};
pub use transfer::{TransferKind, TransferResult, transfer};
