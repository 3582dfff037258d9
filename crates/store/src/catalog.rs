//! Static movie catalog: title → runtime and MPAA rating.
//!
//! The catalog is a single JSON document fetched in full before any scoring
//! happens. A failed load degrades to an empty catalog, so the engine
//! produces no recommendations, which is the worst case this subsystem
//! allows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Rating class assigned to collection items whose title is missing from
/// the catalog, or present without a rating.
pub const UNKNOWN_RATING: &str = "Unknown";

/// Static attributes for one movie. Both fields are optional in the
/// source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Runtime in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// MPAA rating class, e.g. "PG-13"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

/// The full catalog, keyed by unique title.
///
/// Backed by a BTreeMap so iteration order (and therefore scoring input
/// order) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Load the catalog document from disk.
    ///
    /// Load failures are non-fatal: a missing or malformed document yields
    /// an empty catalog and a warning, never an error.
    pub async fn load(path: &Path) -> Self {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read catalog, continuing with empty catalog");
                return Self::default();
            }
        };

        match serde_json::from_str::<BTreeMap<String, CatalogEntry>>(&raw) {
            Ok(entries) => {
                debug!(movies = entries.len(), "catalog loaded");
                Self { entries }
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "catalog document is malformed, continuing with empty catalog");
                Self::default()
            }
        }
    }

    /// Build a catalog directly from entries. Used by tests and tools.
    pub fn from_entries(entries: BTreeMap<String, CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, title: &str) -> Option<&CatalogEntry> {
        self.entries.get(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    /// All entries in title order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CatalogEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct MPAA classes present in the catalog, sorted.
    ///
    /// This is the filter control surface: valid filter values are "all"
    /// plus exactly this list.
    pub fn rating_classes(&self) -> Vec<String> {
        let mut classes: Vec<String> = self
            .entries
            .values()
            .filter_map(|entry| entry.rating.clone())
            .collect();
        classes.sort();
        classes.dedup();
        classes
    }
}
