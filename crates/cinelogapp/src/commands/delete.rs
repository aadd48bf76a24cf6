use crate::error::Result;
use crate::store::MovieStorage;

/// Delete a movie by title. Returns whether a record was removed.
pub fn run<S: MovieStorage>(storage: &mut S, title: &str) -> Result<bool> {
    if !storage.list_movies()?.contains_key(title) {
        return Ok(false);
    }
    storage.delete_movie(title)?;
    Ok(true)
}
