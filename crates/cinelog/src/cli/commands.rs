use super::render;
use super::setup::{Cli, Commands, StorageKind};
use anyhow::Result;
use cinelogapp::api::CatalogApi;
use cinelogapp::commands::add::AddOutcome;
use cinelogapp::omdb::OmdbClient;
use cinelogapp::store::csv::CsvStorage;
use cinelogapp::store::json::JsonStorage;
use cinelogapp::store::MovieStorage;
use clap::Parser;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    // Best effort; a missing .env just means the environment rules.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let path = cli.file.clone().unwrap_or_else(|| default_path(cli.storage));
    let command = cli.command.unwrap_or(Commands::List);

    match cli.storage {
        StorageKind::Json => dispatch(JsonStorage::new(path), command),
        StorageKind::Csv => dispatch(CsvStorage::new(path), command),
    }
}

fn default_path(kind: StorageKind) -> PathBuf {
    match kind {
        StorageKind::Json => PathBuf::from("data/movies.json"),
        StorageKind::Csv => PathBuf::from("data/movies.csv"),
    }
}

fn dispatch<S: MovieStorage>(storage: S, command: Commands) -> Result<()> {
    let mut api = CatalogApi::new(storage);

    match command {
        Commands::List => {
            render::movie_list(&api.list_movies()?.into_iter().collect::<Vec<_>>());
        }
        Commands::Add {
            title,
            year,
            rating,
            poster,
        } => match api.add_movie(&title, year, rating, &poster)? {
            AddOutcome::Added => {
                render::success(&format!("Added '{title}' ({year}) with rating {rating}"))
            }
            AddOutcome::AlreadyExists => {
                render::warning(&format!("Movie '{title}' already exists"))
            }
        },
        Commands::Delete { title } => {
            if api.delete_movie(&title)? {
                render::success(&format!("Deleted '{title}'"));
            } else {
                render::warning(&format!("Movie '{title}' not found"));
            }
        }
        Commands::Update { title, rating } => {
            if api.update_rating(&title, rating)? {
                render::success(&format!("Updated '{title}' to rating {rating}"));
            } else {
                render::warning(&format!("Movie '{title}' not found"));
            }
        }
        Commands::Stats => match api.stats()? {
            Some(stats) => render::stats(&stats),
            None => render::warning("No movies in the catalog"),
        },
        Commands::Random => match api.pick_random()? {
            Some((title, movie)) => render::random_pick(&title, &movie),
            None => render::warning("No movies in the catalog"),
        },
        Commands::Search { query } => {
            let results = api.search(&query)?;
            if results.is_empty() {
                render::warning("No matching movies found");
            } else {
                render::movie_list(&results);
            }
        }
        Commands::Sorted => {
            render::movie_list(&api.sorted_by_rating()?);
        }
        Commands::Generate { output, title } => {
            let count = api.generate_website(&title, &output)?;
            render::success(&format!(
                "Wrote {count} movie(s) to {}",
                output.display()
            ));
        }
        Commands::Fetch { title } => {
            let data = OmdbClient::from_env()?.fetch(&title)?;
            match api.add_movie(&data.title, data.year, data.rating, &data.poster)? {
                AddOutcome::Added => render::success(&format!(
                    "Added '{}' ({}) with rating {}",
                    data.title, data.year, data.rating
                )),
                AddOutcome::AlreadyExists => {
                    render::warning(&format!("Movie '{}' already exists", data.title))
                }
            }
        }
    }

    Ok(())
}
