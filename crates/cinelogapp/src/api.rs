//! # API Facade
//!
//! [`CatalogApi`] is a thin facade over the command layer and the single
//! entry point UI clients should drive. It dispatches to the command modules
//! and returns their structured results; it performs no I/O and no
//! presentation.
//!
//! Generic over [`MovieStorage`], so production code runs against a file
//! backend and tests against [`InMemoryStorage`](crate::store::memory::InMemoryStorage).

use crate::commands;
use crate::commands::add::AddOutcome;
use crate::commands::stats::Stats;
use crate::error::Result;
use crate::model::{Collection, Movie};
use crate::store::MovieStorage;
use crate::website;
use std::path::Path;

pub struct CatalogApi<S: MovieStorage> {
    storage: S,
}

impl<S: MovieStorage> CatalogApi<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn list_movies(&self) -> Result<Collection> {
        self.storage.list_movies()
    }

    pub fn add_movie(
        &mut self,
        title: &str,
        year: i32,
        rating: f64,
        poster: &str,
    ) -> Result<AddOutcome> {
        commands::add::run(&mut self.storage, title, year, rating, poster)
    }

    pub fn delete_movie(&mut self, title: &str) -> Result<bool> {
        commands::delete::run(&mut self.storage, title)
    }

    pub fn update_rating(&mut self, title: &str, rating: f64) -> Result<bool> {
        commands::update::run(&mut self.storage, title, rating)
    }

    pub fn stats(&self) -> Result<Option<Stats>> {
        commands::stats::run(&self.storage)
    }

    pub fn search(&self, query: &str) -> Result<Vec<(String, Movie)>> {
        commands::search::run(&self.storage, query)
    }

    pub fn pick_random(&self) -> Result<Option<(String, Movie)>> {
        commands::pick::run(&self.storage)
    }

    pub fn sorted_by_rating(&self) -> Result<Vec<(String, Movie)>> {
        commands::sorted::run(&self.storage)
    }

    /// Render the catalog to a static HTML page. Returns the number of
    /// movies rendered.
    pub fn generate_website(&self, page_title: &str, output: &Path) -> Result<usize> {
        website::generate(&self.storage, page_title, output)
    }
}
