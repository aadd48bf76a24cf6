use super::MovieStorage;
use crate::error::Result;
use crate::model::{Collection, Movie};

/// In-memory implementation of [`MovieStorage`] for testing catalog logic
/// without filesystem I/O. Not persistent.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    movies: Collection,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store for tests.
    pub fn with_movies<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, Movie)>,
        T: Into<String>,
    {
        Self {
            movies: entries.into_iter().map(|(t, m)| (t.into(), m)).collect(),
        }
    }
}

impl MovieStorage for InMemoryStorage {
    fn list_movies(&self) -> Result<Collection> {
        Ok(self.movies.clone())
    }

    fn add_movie(&mut self, title: &str, year: i32, rating: f64, poster: &str) -> Result<()> {
        self.movies
            .insert(title.to_string(), Movie::new(year, rating, poster));
        Ok(())
    }

    fn delete_movie(&mut self, title: &str) -> Result<()> {
        self.movies.remove(title);
        Ok(())
    }

    fn update_movie(&mut self, title: &str, rating: f64) -> Result<()> {
        if let Some(movie) = self.movies.get_mut(title) {
            movie.rating = rating;
        }
        Ok(())
    }
}
