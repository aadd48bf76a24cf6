use crate::error::Result;
use crate::model::Movie;
use crate::store::MovieStorage;

/// All movies sorted by descending rating; ties keep title order.
pub fn run<S: MovieStorage>(storage: &S) -> Result<Vec<(String, Movie)>> {
    let mut entries: Vec<(String, Movie)> = storage.list_movies()?.into_iter().collect();
    entries.sort_by(|a, b| b.1.rating.total_cmp(&a.1.rating));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStorage;

    #[test]
    fn sorts_by_descending_rating() {
        let storage = InMemoryStorage::with_movies([
            ("The Blob", Movie::new(1958, 6.4, "")),
            ("Alien", Movie::new(1979, 8.5, "")),
            ("Troll 2", Movie::new(1990, 2.9, "")),
        ]);
        let titles: Vec<_> = run(&storage)
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(titles, vec!["Alien", "The Blob", "Troll 2"]);
    }

    #[test]
    fn ties_keep_title_order() {
        let storage = InMemoryStorage::with_movies([
            ("Beta", Movie::new(2000, 7.0, "")),
            ("Alpha", Movie::new(2001, 7.0, "")),
        ]);
        let titles: Vec<_> = run(&storage)
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }
}
