use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = rcopy::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        // app::run already reported the error on stderr.
        Err(_) => ExitCode::FAILURE,
    }
}
