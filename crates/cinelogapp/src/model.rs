//! Core data model: [`Movie`] and the [`Collection`] it lives in.
//!
//! A movie's title is the key of the collection map, not a struct field. This
//! matches the on-disk JSON shape (one object keyed by title) and makes title
//! uniqueness hold by construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The value stored per catalog entry. Data only, no behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Release year. No enforced range.
    pub year: i32,
    /// Rating, expected in [1.0, 10.0] but not enforced by the store.
    pub rating: f64,
    /// Opaque poster reference (URL or path). May be empty.
    pub poster: String,
}

impl Movie {
    pub fn new(year: i32, rating: f64, poster: impl Into<String>) -> Self {
        Self {
            year,
            rating,
            poster: poster.into(),
        }
    }
}

/// The full set of records for one backing file, keyed by title.
///
/// A `BTreeMap` gives deterministic file output; iteration order is still not
/// part of the storage contract.
pub type Collection = BTreeMap<String, Movie>;
