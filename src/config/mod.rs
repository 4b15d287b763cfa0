//! Config module.
//! Run options, diagnostic log level and validation of the source/destination directories.
//! There is no config file and no environment lookup: everything comes from the command line.

pub mod types;
mod validate;

pub use types::{LogLevel, Options};
pub use validate::validate_paths;
