//! Recommendation entry point.
//!
//! Wires the loaded catalog, the user data store, and the engine together
//! for one request. There is deliberately no caching here: every call
//! rebuilds the review index, the profile, and the ranked list, so a
//! collection or review mutation made a moment ago is always reflected.

use crate::error::Result;
use crate::App;
use engine::{top_picks, RatingFilter, RecommendationCard, Recommender, ReviewIndex};
use store::KvStore;
use tracing::debug;

/// Result of a recommendation request for a logged-in user.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    /// The user owns nothing yet; there is no profile to score against.
    /// Distinct from an error; the caller shows an empty state.
    EmptyCollection,
    /// Ranked, filtered display cards, at most 12.
    Ranked(Vec<RecommendationCard>),
}

impl<S: KvStore> App<S> {
    /// Generate recommendations for the logged-in user.
    ///
    /// Fails with `AuthRequired` when nobody is logged in; an empty
    /// collection is a valid state and reports as
    /// [`Recommendations::EmptyCollection`].
    pub fn recommendations(&self, filter: &RatingFilter) -> Result<Recommendations> {
        let username = self.require_user()?;
        let collection = self.data().collection(&username);
        if collection.is_empty() {
            debug!(user = %username, "empty collection, nothing to recommend");
            return Ok(Recommendations::EmptyCollection);
        }

        let index = ReviewIndex::build(self.data());
        let recommender = Recommender::new(self.catalog_arc()).with_jitter(self.jitter());
        let ranked = recommender.recommend(&username, &collection, &index);

        Ok(Recommendations::Ranked(top_picks(&ranked, filter)))
    }

    /// Valid filter values beyond "all": every MPAA class in the catalog.
    pub fn rating_classes(&self) -> Vec<String> {
        self.catalog().rating_classes()
    }
}
