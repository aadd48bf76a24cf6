//! # Storage Layer
//!
//! This module defines the storage abstraction for cinelog. The
//! [`MovieStorage`] trait allows the application to work with different
//! on-disk encodings behind one contract.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStorage` (no filesystem needed)
//! - Allow **interchangeable encodings** (JSON document vs. CSV table)
//!   without changing catalog logic
//! - Keep catalog logic **decoupled** from persistence details
//!
//! ## Consistency Rules
//!
//! Every backend upholds the same observable semantics:
//!
//! - **Stateless instances**: a backend holds a file path and nothing else.
//!   Every operation re-reads from disk, so external edits to the file are
//!   picked up on the next call.
//! - **Whole-file rewrite**: mutations load the full collection, change the
//!   in-memory map, and re-serialize everything. Never incremental in-place
//!   edits. This is a deliberate simplicity/safety tradeoff at catalog scale.
//! - **Upsert-by-title**: `add_movie` on an existing title overwrites.
//!   "Already exists" refusal belongs to the command layer.
//! - **Missing file is empty**: `list_movies` on an absent file returns an
//!   empty collection, not an error. The first successful `add_movie` creates
//!   the file.
//! - **No silent repair**: a file that exists but does not parse, or a field
//!   that fails type conversion, fails the whole load with
//!   [`CinelogError::Parse`](crate::error::CinelogError::Parse). Rows are
//!   never skipped.
//! - **Atomic writes**: files are replaced via write-to-temp-then-rename, so
//!   a failed write leaves the previous content intact.
//!
//! The store performs no locking; concurrent mutation of one file from
//! multiple processes is the caller's problem. Two backends pointed at
//! different paths are fully independent.
//!
//! ## Implementations
//!
//! - [`json::JsonStorage`]: one JSON object keyed by title
//! - [`csv::CsvStorage`]: one delimited table with a `title,year,rating,poster` header
//! - [`memory::InMemoryStorage`]: in-memory map for testing

use crate::error::Result;
use crate::model::Collection;
use std::fs;
use std::path::{Path, PathBuf};

pub mod csv;
pub mod json;
pub mod memory;

/// Abstract interface for movie storage.
///
/// Implementations persist one [`Collection`] per backing file and must
/// follow the module-level consistency rules.
pub trait MovieStorage {
    /// Return the full collection. Empty (not an error) if the backing file
    /// does not exist.
    fn list_movies(&self) -> Result<Collection>;

    /// Insert or overwrite the record for `title`, then persist.
    fn add_movie(&mut self, title: &str, year: i32, rating: f64, poster: &str) -> Result<()>;

    /// Remove the record if present. No-op if absent.
    fn delete_movie(&mut self, title: &str) -> Result<()>;

    /// Replace only the rating of an existing record. No-op if absent.
    fn update_movie(&mut self, title: &str, rating: f64) -> Result<()>;
}

/// Replace `path` with `content` via a temp file in the same directory.
/// Creates parent directories on first write.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("collection");
    let tmp = dir.join(format!(".{}-{}.tmp", file_name, std::process::id()));
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
