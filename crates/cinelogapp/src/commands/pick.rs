use crate::error::Result;
use crate::model::Movie;
use crate::store::MovieStorage;
use std::time::{SystemTime, UNIX_EPOCH};

/// Pick one movie at random. `None` when the catalog is empty.
pub fn run<S: MovieStorage>(storage: &S) -> Result<Option<(String, Movie)>> {
    let movies = storage.list_movies()?;
    if movies.is_empty() {
        return Ok(None);
    }
    // A time-seeded index is plenty of randomness for "surprise me".
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0) as usize;
    let index = nanos % movies.len();
    Ok(movies.into_iter().nth(index))
}
