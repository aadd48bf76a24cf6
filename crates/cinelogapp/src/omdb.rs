//! OMDb lookup client.
//!
//! Fetch-by-title against <http://www.omdbapi.com/>. This is a collaborator of
//! the catalog, not part of the storage core: callers take the returned
//! [`MovieData`] and store it through the usual trait operations.

use crate::error::{CinelogError, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const OMDB_URL: &str = "http://www.omdbapi.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// ── Response types ───────────────────────────────────────────────

/// Raw OMDb response body. OMDb signals "not found" in-band with
/// `{"Response": "False", "Error": "..."}` and uses `"N/A"` for absent fields.
#[derive(Debug, Deserialize)]
pub(crate) struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

/// A lookup result, already converted to catalog field types.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieData {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: String,
}

// ── Client ───────────────────────────────────────────────────────

pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    /// Reads the API key from the `OMDB_API_KEY` env var.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var("OMDB_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| CinelogError::Lookup("OMDB_API_KEY is not set".to_string()))?;
        Ok(Self::new(key))
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: OMDB_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Fetch movie details by title.
    ///
    /// Network, HTTP, and decode failures map to
    /// [`CinelogError::Lookup`]; OMDb's in-band "not found" maps to
    /// [`CinelogError::MovieNotFound`].
    pub fn fetch(&self, title: &str) -> Result<MovieData> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .map_err(|e| CinelogError::Lookup(format!("failed to reach OMDb: {e}")))?
            .error_for_status()
            .map_err(|e| CinelogError::Lookup(format!("OMDb returned an error: {e}")))?;

        let body: OmdbResponse = response
            .json()
            .map_err(|e| CinelogError::Lookup(format!("invalid OMDb response: {e}")))?;
        into_movie_data(body)
    }
}

pub(crate) fn into_movie_data(body: OmdbResponse) -> Result<MovieData> {
    if body.response != "True" {
        return Err(CinelogError::MovieNotFound(
            body.error.unwrap_or_else(|| "Movie not found".to_string()),
        ));
    }
    let title = body
        .title
        .ok_or_else(|| CinelogError::Lookup("OMDb response missing Title".to_string()))?;
    let year = parse_year(body.year.as_deref().unwrap_or("")).ok_or_else(|| {
        CinelogError::Lookup(format!(
            "OMDb returned an unusable year: '{}'",
            body.year.as_deref().unwrap_or("")
        ))
    })?;
    Ok(MovieData {
        title,
        year,
        rating: parse_optional_number(body.imdb_rating.as_deref()).unwrap_or(0.0),
        poster: na_to_empty(body.poster),
    })
}

/// OMDb years come as "1979" or "2008–2013" (series). Take the leading digits.
fn parse_year(raw: &str) -> Option<i32> {
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn parse_optional_number(raw: Option<&str>) -> Option<f64> {
    raw.filter(|s| *s != "N/A").and_then(|s| s.parse().ok())
}

fn na_to_empty(raw: Option<String>) -> String {
    match raw {
        Some(s) if s != "N/A" => s,
        _ => String::new(),
    }
}
