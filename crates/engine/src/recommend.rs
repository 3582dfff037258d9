//! The scoring sweep: profile → score every non-owned catalog entry →
//! ranked list.

use crate::jitter::Jitter;
use crate::profile::PreferenceProfile;
use crate::ranking::rank;
use crate::review_index::ReviewIndex;
use crate::scoring::{score_candidate, ScoredCandidate};
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use store::{Catalog, CollectionItem};
use tracing::{debug, instrument};

/// Scores the whole catalog against one user's profile.
///
/// Holds no per-user state: the profile and candidate list are rebuilt
/// from scratch on every call, so collection mutations are picked up by
/// simply calling [`Recommender::recommend`] again.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    jitter: Jitter,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            jitter: Jitter::entropy(),
        }
    }

    /// Configure the jitter source (builder pattern).
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Produce the ranked candidate list for one user.
    ///
    /// ## Algorithm
    /// 1. Build the preference profile from the collection and the user's
    ///    highly-rated titles.
    /// 2. Score every catalog entry not in the collection, in parallel.
    ///    Per-candidate jitter depends only on seed and title, so the
    ///    split into parallel chunks cannot change any score.
    /// 3. Drop non-positive totals and sort descending.
    #[instrument(skip_all, fields(user = username, owned = collection.len()))]
    pub fn recommend(
        &self,
        username: &str,
        collection: &[CollectionItem],
        index: &ReviewIndex,
    ) -> Vec<ScoredCandidate> {
        let highly_rated = index.highly_rated(username);
        let profile = PreferenceProfile::build(collection, highly_rated, &self.catalog);

        let owned: HashSet<&str> = collection.iter().map(|item| item.title.as_str()).collect();
        let candidates: Vec<(&String, &store::CatalogEntry)> = self
            .catalog
            .iter()
            .filter(|(title, _)| !owned.contains(title.as_str()))
            .collect();

        let scored: Vec<ScoredCandidate> = candidates
            .par_iter()
            .map(|&(title, entry)| score_candidate(title, entry, &profile, index, &self.jitter))
            .filter(|candidate| candidate.score > 0.0)
            .collect();

        debug!(
            catalog = self.catalog.len(),
            scored = scored.len(),
            "scored catalog against profile"
        );
        rank(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use store::{CatalogEntry, MemoryStore, Review, UserData};

    fn catalog() -> Arc<Catalog> {
        let mut entries = BTreeMap::new();
        for (title, runtime, rating) in [
            ("Titanic", 194u32, "PG-13"),
            ("Gattaca", 107, "PG-13"),
            ("The Game", 129, "R"),
            ("Anastasia", 94, "G"),
            ("Sphere", 134, "PG-13"),
        ] {
            entries.insert(
                title.to_string(),
                CatalogEntry {
                    runtime: Some(runtime),
                    rating: Some(rating.to_string()),
                },
            );
        }
        Arc::new(Catalog::from_entries(entries))
    }

    fn owned(titles: &[&str]) -> Vec<CollectionItem> {
        titles
            .iter()
            .map(|t| CollectionItem {
                title: t.to_string(),
                poster: None,
            })
            .collect()
    }

    fn empty_index() -> ReviewIndex {
        ReviewIndex::build(&UserData::new(MemoryStore::new()))
    }

    #[test]
    fn test_owned_titles_never_recommended() {
        let recommender = Recommender::new(catalog()).with_jitter(Jitter::Seeded(1));
        let collection = owned(&["Titanic", "Gattaca"]);

        let ranked = recommender.recommend("ada", &collection, &empty_index());

        assert!(!ranked.is_empty());
        for candidate in &ranked {
            assert_ne!(candidate.title, "Titanic");
            assert_ne!(candidate.title, "Gattaca");
        }
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let collection = owned(&["Titanic"]);
        let index = empty_index();

        let first = Recommender::new(catalog())
            .with_jitter(Jitter::Seeded(7))
            .recommend("ada", &collection, &index);
        let second = Recommender::new(catalog())
            .with_jitter(Jitter::Seeded(7))
            .recommend("ada", &collection, &index);

        let titles = |ranked: &[ScoredCandidate]| {
            ranked.iter().map(|c| c.title.clone()).collect::<Vec<_>>()
        };
        assert_eq!(titles(&first), titles(&second));
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.score, b.score);
            assert_eq!(a.reasons, b.reasons);
        }
    }

    #[test]
    fn test_scores_non_negative_and_reasons_ordered() {
        let data = UserData::new(MemoryStore::new());
        // Give "ada" a highly-rated title and "Sphere" a sympathetic
        // reviewer so the collaborative component fires.
        for (title, user, rating) in [("Titanic", "ada", 5), ("Titanic", "bob", 5), ("Sphere", "bob", 5)] {
            data.append_review(
                title,
                Review {
                    username: user.to_string(),
                    rating,
                    text: String::new(),
                    date: "2026-01-01T00:00:00Z".to_string(),
                },
            )
            .unwrap();
        }
        let index = ReviewIndex::build(&data);

        let ranked = Recommender::new(catalog())
            .with_jitter(Jitter::Seeded(3))
            .recommend("ada", &owned(&["Titanic"]), &index);

        for candidate in &ranked {
            assert!(candidate.score > 0.0);
        }
        let sphere = ranked.iter().find(|c| c.title == "Sphere").unwrap();
        assert!(sphere
            .reasons
            .contains(&"Liked by users with similar taste".to_string()));
    }

    #[test]
    fn test_empty_catalog_yields_no_candidates() {
        let recommender =
            Recommender::new(Arc::new(Catalog::default())).with_jitter(Jitter::Seeded(1));
        let ranked = recommender.recommend("ada", &owned(&["Titanic"]), &empty_index());
        assert!(ranked.is_empty());
    }
}
