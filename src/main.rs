//! mofmatch CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. Errors are reported as a
//! JSON response on stdout and a plain line on stderr; the exit code is
//! non-zero on failure.

use mofmatch::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
