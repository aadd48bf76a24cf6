use crate::error::Result;
use crate::store::MovieStorage;

/// Replace the rating of an existing movie. Returns whether a record changed.
pub fn run<S: MovieStorage>(storage: &mut S, title: &str, rating: f64) -> Result<bool> {
    if !storage.list_movies()?.contains_key(title) {
        return Ok(false);
    }
    storage.update_movie(title, rating)?;
    Ok(true)
}
