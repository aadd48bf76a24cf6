//! # CLI Layer
//!
//! This is **one possible UI client** for the cinelog library — not the
//! application itself. It is the only place in the workspace that:
//!
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap argument definitions
//! - `commands`: backend selection and per-command dispatch
//! - `render`: styled terminal output
//!
//! Running `cinelog` with no subcommand defaults to `list` — reading the
//! catalog is most of the usage and should be the path of least resistance.

mod commands;
mod render;
mod setup;

pub use commands::run;
