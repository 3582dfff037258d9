//! # Engine Crate
//!
//! The recommendation engine: everything between the raw stores and the
//! rendering boundary.
//!
//! ## Pipeline
//!
//! 1. **profile**: derive a [`PreferenceProfile`] from the user's
//!    collection and reviews (rating-class counts, average runtime,
//!    highly-rated titles)
//! 2. **review_index**: one pass over the system-wide review scan, indexed
//!    by movie and by reviewer, powering the collaborative signal
//! 3. **scoring**: additive per-candidate score with human-readable
//!    reasons and an injectable jitter tie-break
//! 4. **ranking**: descending sort, optional MPAA-class filter, top-12
//!    display cards
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{Jitter, RatingFilter, Recommender, ReviewIndex};
//!
//! let index = ReviewIndex::build(&data);
//! let ranked = Recommender::new(catalog)
//!     .with_jitter(Jitter::Seeded(42))
//!     .recommend("ada", &collection, &index);
//! let cards = engine::top_picks(&ranked, &RatingFilter::All);
//! ```
//!
//! Nothing here persists: profile, index, and ranked list are rebuilt on
//! every request, so any collection or review mutation is visible to the
//! next call.

// Public modules
pub mod jitter;
pub mod profile;
pub mod ranking;
pub mod recommend;
pub mod review_index;
pub mod scoring;

// Re-export main types
pub use jitter::{Jitter, JITTER_MAX};
pub use profile::PreferenceProfile;
pub use ranking::{
    match_percent, poster_path, rank, top_picks, RatingFilter, RecommendationCard, DISPLAY_LIMIT,
    REASON_LIMIT,
};
pub use recommend::Recommender;
pub use review_index::{ReviewIndex, COLLABORATIVE_CAP, HIGH_RATING_THRESHOLD, OVERLAP_WEIGHT};
pub use scoring::{score_candidate, ScoredCandidate};
