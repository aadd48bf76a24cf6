use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StorageKind {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "cinelog", bin_name = "cinelog", version)]
#[command(about = "Personal movie catalog for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Storage backend to use
    #[arg(short, long, value_enum, default_value = "json", global = true)]
    pub storage: StorageKind,

    /// Path to the storage file (defaults to data/movies.json or data/movies.csv)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all movies (the default when no command is given)
    List,
    /// Add a movie to the catalog
    Add {
        title: String,
        year: i32,
        /// Rating from 1.0 to 10.0
        rating: f64,
        /// Poster URL or path
        #[arg(default_value = "")]
        poster: String,
    },
    /// Delete a movie by title
    Delete { title: String },
    /// Update the rating of an existing movie
    Update { title: String, rating: f64 },
    /// Show rating statistics
    Stats,
    /// Pick a random movie
    Random,
    /// Search movies by partial title
    Search { query: String },
    /// List movies sorted by descending rating
    Sorted,
    /// Generate a static HTML page of the catalog
    Generate {
        /// Where to write the page
        #[arg(short, long, default_value = "public/index.html")]
        output: PathBuf,
        /// Page title
        #[arg(short, long, default_value = "My Movie Catalog")]
        title: String,
    },
    /// Look up a movie on OMDb and add it to the catalog
    Fetch { title: String },
}
