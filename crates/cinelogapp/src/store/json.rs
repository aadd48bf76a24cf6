use super::{atomic_write, MovieStorage};
use crate::error::{CinelogError, Result};
use crate::model::{Collection, Movie};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-backed storage: the whole collection is one object keyed by title,
/// each value `{ "year": <int>, "rating": <float>, "poster": <string> }`.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Collection> {
        if !self.path.exists() {
            return Ok(Collection::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| CinelogError::parse(&self.path, e.to_string()))
    }

    fn save(&self, movies: &Collection) -> Result<()> {
        let content = serde_json::to_string_pretty(movies)
            .map_err(|e| CinelogError::Store(e.to_string()))?;
        atomic_write(&self.path, &content)
    }
}

impl MovieStorage for JsonStorage {
    fn list_movies(&self) -> Result<Collection> {
        self.load()
    }

    fn add_movie(&mut self, title: &str, year: i32, rating: f64, poster: &str) -> Result<()> {
        let mut movies = self.load()?;
        movies.insert(title.to_string(), Movie::new(year, rating, poster));
        self.save(&movies)
    }

    fn delete_movie(&mut self, title: &str) -> Result<()> {
        let mut movies = self.load()?;
        if movies.remove(title).is_some() {
            self.save(&movies)?;
        }
        Ok(())
    }

    fn update_movie(&mut self, title: &str, rating: f64) -> Result<()> {
        let mut movies = self.load()?;
        if let Some(movie) = movies.get_mut(title) {
            movie.rating = rating;
            self.save(&movies)?;
        }
        Ok(())
    }
}
