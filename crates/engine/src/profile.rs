//! Preference profile derived from a user's collection and reviews.
//!
//! The profile is ephemeral: rebuilt from scratch on every recommendation
//! request, never persisted. Building it is a pure function of its inputs.

use std::collections::{HashMap, HashSet};
use store::{Catalog, CollectionItem, UNKNOWN_RATING};

/// What we know about a user's taste.
#[derive(Debug, Clone, Default)]
pub struct PreferenceProfile {
    /// Owned movies per MPAA class. Titles missing from the catalog (or
    /// present without a rating) count under [`UNKNOWN_RATING`].
    pub rating_counts: HashMap<String, u32>,
    /// Mean runtime of owned movies with catalog runtimes, 0 when none
    /// have one.
    pub average_runtime: f64,
    /// Titles the user reviewed with 4 stars or more. Sourced from the
    /// review index's per-user view of the system-wide scan.
    pub highly_rated: HashSet<String>,
}

impl PreferenceProfile {
    /// Build the profile for one user.
    ///
    /// ## Algorithm
    /// 1. For each owned item, look up its MPAA class in the catalog
    ///    (default "Unknown") and count it.
    /// 2. Average the runtimes of owned items the catalog knows; an empty
    ///    set averages to 0 rather than dividing by zero.
    /// 3. Carry the user's highly-rated titles for collaborative lookups.
    pub fn build(
        collection: &[CollectionItem],
        highly_rated: HashSet<String>,
        catalog: &Catalog,
    ) -> Self {
        let mut rating_counts: HashMap<String, u32> = HashMap::new();
        let mut runtimes: Vec<f64> = Vec::new();

        for item in collection {
            let entry = catalog.get(&item.title);
            let class = entry
                .and_then(|e| e.rating.as_deref())
                .unwrap_or(UNKNOWN_RATING);
            *rating_counts.entry(class.to_string()).or_insert(0) += 1;

            if let Some(runtime) = entry.and_then(|e| e.runtime) {
                runtimes.push(runtime as f64);
            }
        }

        let average_runtime = if runtimes.is_empty() {
            0.0
        } else {
            runtimes.iter().sum::<f64>() / runtimes.len() as f64
        };

        Self {
            rating_counts,
            average_runtime,
            highly_rated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use store::CatalogEntry;

    fn catalog() -> Catalog {
        let mut entries = BTreeMap::new();
        entries.insert(
            "Titanic".to_string(),
            CatalogEntry {
                runtime: Some(194),
                rating: Some("PG-13".to_string()),
            },
        );
        entries.insert(
            "Gattaca".to_string(),
            CatalogEntry {
                runtime: Some(107),
                rating: Some("PG-13".to_string()),
            },
        );
        entries.insert(
            "The Game".to_string(),
            CatalogEntry {
                runtime: Some(129),
                rating: Some("R".to_string()),
            },
        );
        entries.insert(
            "No Metadata".to_string(),
            CatalogEntry {
                runtime: None,
                rating: None,
            },
        );
        Catalog::from_entries(entries)
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

    #[test]
    fn test_rating_counts() {
        let profile = PreferenceProfile::build(
            &owned(&["Titanic", "Gattaca", "The Game"]),
            HashSet::new(),
            &catalog(),
        );

        assert_eq!(profile.rating_counts["PG-13"], 2);
        assert_eq!(profile.rating_counts["R"], 1);
    }

    #[test]
    fn test_unknown_rating_fallback() {
        // One title the catalog has no rating for, one it has never heard of.
        let profile = PreferenceProfile::build(
            &owned(&["No Metadata", "Straight To Video"]),
            HashSet::new(),
            &catalog(),
        );

        assert_eq!(profile.rating_counts[UNKNOWN_RATING], 2);
    }

    #[test]
    fn test_average_runtime() {
        let profile = PreferenceProfile::build(
            &owned(&["Titanic", "Gattaca"]),
            HashSet::new(),
            &catalog(),
        );

        assert!((profile.average_runtime - 150.5).abs() < 1e-9);
    }

    #[test]
    fn test_average_runtime_empty_is_zero() {
        // Owned titles without catalog runtimes must not divide by zero.
        let profile =
            PreferenceProfile::build(&owned(&["No Metadata"]), HashSet::new(), &catalog());
        assert_eq!(profile.average_runtime, 0.0);

        let empty = PreferenceProfile::build(&[], HashSet::new(), &catalog());
        assert_eq!(empty.average_runtime, 0.0);
    }
}
