//! # Cinelog Architecture
//!
//! Cinelog is a **UI-agnostic movie catalog library**. The CLI in
//! `crates/cinelog` is one possible client; nothing in this crate writes to
//! stdout/stderr, calls `std::process::exit`, or assumes a terminal.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure catalog logic: add/delete/update, stats, search     │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract MovieStorage trait                              │
//! │  - JsonStorage / CsvStorage (production), InMemoryStorage   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The storage layer is the part of the crate with a real contract: one trait,
//! multiple encodings, identical observable semantics. See [`store`] for the
//! consistency rules every backend must uphold.
//!
//! Beside the core sit two collaborators that only talk to storage through the
//! trait: the OMDb lookup client ([`omdb`]) and the static website exporter
//! ([`website`]).
//!
//! ## Testing Strategy
//!
//! - Command modules carry unit tests against [`store::memory::InMemoryStorage`].
//! - Backend contract behavior is covered by integration tests in `tests/`,
//!   which exercise real files in temporary directories.

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod omdb;
pub mod store;
pub mod website;
