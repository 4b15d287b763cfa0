use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when the stream is a TTY.
fn is_tty(stream: atty::Stream) -> bool {
    atty::is(stream)
}

pub fn print_warn(msg: &str) {
    if is_tty(atty::Stream::Stderr) {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty(atty::Stream::Stderr) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print a plain progress line (no prefix, no color) such as
/// "Copy src/a.txt -> dest/a.txt", which users may script against.
/// A closed stdout (e.g. piped into `head`) comes back as `BrokenPipe`.
pub fn print_user(msg: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{msg}")
}
