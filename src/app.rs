//! Application orchestrator.
//! Initializes logging, installs the signal handler, validates the pattern and paths,
//! and runs the collector.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use rcopy::cli::Args;
use rcopy::output as out;
use rcopy::{FilePattern, RcopyError, collect_matching, shutdown, validate_paths};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let guard_opt = init_tracing(
        &args.effective_log_level(),
        args.log_file.as_deref(),
        args.json,
    )
    .map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        if let Err(e) = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping after the current file...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        }) {
            out::print_warn(&format!("Could not install interrupt handler: {e}"));
        }
    }

    debug!("Starting rcopy: {:?}", args);

    let result = (|| -> Result<()> {
        // Argument checks happen before anything is walked.
        let pattern = FilePattern::new(&args.pattern)?;
        validate_paths(&args.source, &args.destination)?;

        let opts = args.options();
        let summary = collect_matching(&pattern, &args.source, &args.destination, &opts)?;
        info!(
            transferred = summary.transferred,
            matched = summary.matched,
            dry_run = opts.dry_run,
            "Run completed"
        );
        Ok(())
    })();

    if let Err(e) = &result {
        if let Some(re) = e.downcast_ref::<RcopyError>() {
            debug!(code = re.code(), kind = re.kind(), error = %re, "rcopy failed");
        } else {
            debug!(error = ?e, "rcopy failed");
        }
        out::print_error(&format!("{e:#}"));
    }

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}
