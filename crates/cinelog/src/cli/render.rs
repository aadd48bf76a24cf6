//! Styled terminal output. Layout stays in Rust; `console` handles color and
//! degrades automatically when stdout is not a terminal.

use cinelogapp::commands::stats::Stats;
use cinelogapp::model::Movie;
use console::style;

pub fn movie_list(entries: &[(String, Movie)]) {
    let suffix = if entries.len() == 1 { "" } else { "s" };
    println!("{} movie{suffix} in total", entries.len());
    for (title, movie) in entries {
        println!(
            "{} ({}): {}",
            style(title).bold(),
            movie.year,
            style(movie.rating).cyan()
        );
    }
}

pub fn stats(stats: &Stats) {
    println!("Average rating: {:.2}", stats.average);
    println!("Median rating:  {:.2}", stats.median);
    println!(
        "Best movie{} ({}): {}",
        if stats.best.len() > 1 { "s" } else { "" },
        stats.best_rating,
        style(stats.best.join(", ")).green()
    );
    println!(
        "Worst movie{} ({}): {}",
        if stats.worst.len() > 1 { "s" } else { "" },
        stats.worst_rating,
        style(stats.worst.join(", ")).red()
    );
}

pub fn random_pick(title: &str, movie: &Movie) {
    println!(
        "Random pick: {} ({}), {}",
        style(title).bold(),
        movie.year,
        movie.rating
    );
}

pub fn success(message: &str) {
    println!("{}", style(message).green());
}

pub fn warning(message: &str) {
    println!("{}", style(message).yellow());
}
