use crate::error::{CinelogError, Result};
use crate::store::MovieStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The title is already in the catalog; nothing was written.
    AlreadyExists,
}

pub fn run<S: MovieStorage>(
    storage: &mut S,
    title: &str,
    year: i32,
    rating: f64,
    poster: &str,
) -> Result<AddOutcome> {
    if title.trim().is_empty() {
        return Err(CinelogError::Store("title must not be empty".to_string()));
    }
    if storage.list_movies()?.contains_key(title) {
        return Ok(AddOutcome::AlreadyExists);
    }
    storage.add_movie(title, year, rating, poster)?;
    Ok(AddOutcome::Added)
}
