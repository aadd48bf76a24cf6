use crate::error::Result;
use crate::model::Movie;
use crate::store::MovieStorage;

/// Case-insensitive substring search over titles, in title order.
pub fn run<S: MovieStorage>(storage: &S, query: &str) -> Result<Vec<(String, Movie)>> {
    let needle = query.to_lowercase();
    Ok(storage
        .list_movies()?
        .into_iter()
        .filter(|(title, _)| title.to_lowercase().contains(&needle))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStorage;

    fn catalog() -> InMemoryStorage {
        InMemoryStorage::with_movies([
            ("Alien", Movie::new(1979, 8.5, "")),
            ("Aliens", Movie::new(1986, 8.4, "")),
            ("The Blob", Movie::new(1958, 6.4, "")),
        ])
    }

    #[test]
    fn matches_are_case_insensitive() {
        let results = run(&catalog(), "alien").unwrap();
        let titles: Vec<_> = results.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Aliens"]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(run(&catalog(), "Godzilla").unwrap().is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(run(&catalog(), "").unwrap().len(), 3);
    }
}
