//! CSV-backed storage.
//!
//! One delimited table per collection: a `title,year,rating,poster` header
//! followed by one row per record, RFC 4180 quoting (quote doubling) for
//! fields containing the delimiter, the quote character, or newlines.
//!
//! Columns are resolved by header name, so older files with a different
//! column order still load. A row missing its `poster` value defaults to the
//! empty string; a row with a non-numeric `year` or `rating` fails the whole
//! load rather than being skipped.

use super::{atomic_write, MovieStorage};
use crate::error::{CinelogError, Result};
use crate::model::{Collection, Movie};
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
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
        parse_document(&content).map_err(|reason| CinelogError::parse(&self.path, reason))
    }

    fn save(&self, movies: &Collection) -> Result<()> {
        let mut out = String::from("title,year,rating,poster\n");
        for (title, movie) in movies {
            out.push_str(&escape(title));
            out.push(',');
            out.push_str(&movie.year.to_string());
            out.push(',');
            out.push_str(&movie.rating.to_string());
            out.push(',');
            out.push_str(&escape(&movie.poster));
            out.push('\n');
        }
        atomic_write(&self.path, &out)
    }
}

impl MovieStorage for CsvStorage {
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

/// Parse a whole CSV document into a collection.
///
/// The error is a plain reason string; the caller attaches the file path.
fn parse_document(content: &str) -> std::result::Result<Collection, String> {
    let rows = parse_rows(content)?;
    let mut rows = rows.into_iter();
    let header = match rows.next() {
        Some(h) => h,
        // An empty file holds an empty collection.
        None => return Ok(Collection::new()),
    };

    let column = |name: &str| header.iter().position(|h| h == name);
    let title_col = column("title").ok_or("missing 'title' column")?;
    let year_col = column("year").ok_or("missing 'year' column")?;
    let rating_col = column("rating").ok_or("missing 'rating' column")?;
    let poster_col = column("poster");

    let mut movies = Collection::new();
    for (i, row) in rows.enumerate() {
        let line = i + 2;
        let field = |col: usize| row.get(col).map(String::as_str).unwrap_or("");

        let title = field(title_col);
        if title.is_empty() {
            return Err(format!("row {line}: empty title"));
        }
        let year: i32 = field(year_col)
            .trim()
            .parse()
            .map_err(|_| format!("row {line}: invalid year '{}'", field(year_col)))?;
        let rating: f64 = field(rating_col)
            .trim()
            .parse()
            .map_err(|_| format!("row {line}: invalid rating '{}'", field(rating_col)))?;
        let poster = poster_col.map(field).unwrap_or("");

        movies.insert(title.to_string(), Movie::new(year, rating, poster));
    }
    Ok(movies)
}

/// Split a CSV document into rows of fields, honoring RFC 4180 quoting.
/// Quoted fields may contain delimiters, doubled quotes, and newlines.
fn parse_rows(input: &str) -> std::result::Result<Vec<Vec<String>>, String> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                // Blank lines are not records.
                if row.len() > 1 || !row[0].is_empty() {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    Ok(rows)
}

/// Quote a field if it contains the delimiter, a quote, or a newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
