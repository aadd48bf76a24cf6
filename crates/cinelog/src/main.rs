//! The cinelog binary is intentionally thin: the CLI lives in `src/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//! Everything from `cinelogapp::api` inward is UI agnostic; this crate owns
//! argument parsing, rendering, and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
