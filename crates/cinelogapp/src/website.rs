//! Static website exporter.
//!
//! Renders the full collection into an HTML grid. The page template is
//! embedded at compile time; `__TEMPLATE_TITLE__` and
//! `__TEMPLATE_MOVIE_GRID__` are the substitution points.

use crate::error::Result;
use crate::store::MovieStorage;
use std::fs;
use std::path::Path;

const TEMPLATE: &str = include_str!("../templates/index.html");

/// Render the catalog into `output` and return the number of movies written.
pub fn generate<S: MovieStorage>(storage: &S, page_title: &str, output: &Path) -> Result<usize> {
    let movies = storage.list_movies()?;

    let mut grid = String::new();
    for (title, movie) in &movies {
        grid.push_str(&format!(
            concat!(
                "<li class=\"movie-item\">",
                "<div class=\"poster\"><img src=\"{poster}\" alt=\"{title} poster\"/></div>",
                "<div class=\"details\">",
                "<h2>{title}</h2>",
                "<p>Year: {year}</p>",
                "<p>Rating: {rating}</p>",
                "</div></li>\n"
            ),
            poster = escape_html(&movie.poster),
            title = escape_html(title),
            year = movie.year,
            rating = movie.rating,
        ));
    }

    let html = TEMPLATE
        .replace("__TEMPLATE_TITLE__", &escape_html(page_title))
        .replace("__TEMPLATE_MOVIE_GRID__", &grid);

    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(output, html)?;
    Ok(movies.len())
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
