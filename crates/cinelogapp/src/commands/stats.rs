use crate::error::Result;
use crate::store::MovieStorage;

/// Rating statistics over the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    pub best_rating: f64,
    pub worst_rating: f64,
    /// Titles tied for the best rating, in title order.
    pub best: Vec<String>,
    /// Titles tied for the worst rating, in title order.
    pub worst: Vec<String>,
}

/// Compute stats. `None` when the catalog is empty.
pub fn run<S: MovieStorage>(storage: &S) -> Result<Option<Stats>> {
    let movies = storage.list_movies()?;
    if movies.is_empty() {
        return Ok(None);
    }

    let mut ratings: Vec<f64> = movies.values().map(|m| m.rating).collect();
    ratings.sort_by(|a, b| a.total_cmp(b));

    let count = ratings.len();
    let average = ratings.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        ratings[count / 2]
    } else {
        (ratings[count / 2 - 1] + ratings[count / 2]) / 2.0
    };
    let best_rating = ratings[count - 1];
    let worst_rating = ratings[0];

    let titles_with = |rating: f64| {
        movies
            .iter()
            .filter(|(_, m)| m.rating == rating)
            .map(|(t, _)| t.clone())
            .collect::<Vec<_>>()
    };

    Ok(Some(Stats {
        count,
        average,
        median,
        best_rating,
        worst_rating,
        best: titles_with(best_rating),
        worst: titles_with(worst_rating),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::memory::InMemoryStorage;

    fn catalog() -> InMemoryStorage {
        InMemoryStorage::with_movies([
            ("Alien", Movie::new(1979, 8.5, "")),
            ("The Blob", Movie::new(1958, 6.4, "")),
            ("Solaris", Movie::new(1972, 8.0, "")),
            ("Troll 2", Movie::new(1990, 2.9, "")),
        ])
    }

    #[test]
    fn empty_catalog_has_no_stats() {
        assert_eq!(run(&InMemoryStorage::new()).unwrap(), None);
    }

    #[test]
    fn computes_average_and_even_median() {
        let stats = run(&catalog()).unwrap().unwrap();
        assert_eq!(stats.count, 4);
        assert!((stats.average - 6.45).abs() < 1e-9);
        assert!((stats.median - 7.2).abs() < 1e-9);
    }

    #[test]
    fn odd_median_is_the_middle_rating() {
        let mut storage = catalog();
        storage.add_movie("Stalker", 1979, 8.0, "").unwrap();
        let stats = run(&storage).unwrap().unwrap();
        assert_eq!(stats.median, 8.0);
    }

    #[test]
    fn best_and_worst_keep_ties() {
        let mut storage = catalog();
        storage.add_movie("Aliens", 1986, 8.5, "").unwrap();
        let stats = run(&storage).unwrap().unwrap();
        assert_eq!(stats.best, vec!["Alien".to_string(), "Aliens".to_string()]);
        assert_eq!(stats.worst, vec!["Troll 2".to_string()]);
        assert_eq!(stats.best_rating, 8.5);
        assert_eq!(stats.worst_rating, 2.9);
    }
}
