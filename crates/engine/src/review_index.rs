//! Secondary indexes over the system-wide review scan.
//!
//! Collaborative filtering needs two views of the same data: every review
//! of a given movie, and every title a given user has rated highly. Rather
//! than re-scanning the whole store per candidate, both indexes are built
//! in one pass over the `reviews:` prefix and queried in O(1) during
//! scoring. Behavior is equivalent to the linear scan.

use std::collections::{HashMap, HashSet};
use store::{KvStore, Review, UserData};
use tracing::debug;

/// A review counts as "highly rated" at this star count and above.
pub const HIGH_RATING_THRESHOLD: u8 = 4;

/// Points per overlapping highly-rated title.
pub const OVERLAP_WEIGHT: f64 = 15.0;

/// Ceiling on the collaborative component of a score.
pub const COLLABORATIVE_CAP: f64 = 50.0;

/// Review data indexed two ways: by movie title, and by reviewer.
#[derive(Debug, Default)]
pub struct ReviewIndex {
    /// title → every review recorded for it
    by_title: HashMap<String, Vec<Review>>,
    /// username → titles that user rated >= 4
    liked_by: HashMap<String, HashSet<String>>,
}

impl ReviewIndex {
    /// Build both indexes in one pass over the review keys.
    pub fn build<S: KvStore>(data: &UserData<S>) -> Self {
        let mut by_title: HashMap<String, Vec<Review>> = HashMap::new();
        let mut liked_by: HashMap<String, HashSet<String>> = HashMap::new();

        for (title, reviews) in data.all_reviews() {
            for review in &reviews {
                if review.rating >= HIGH_RATING_THRESHOLD {
                    liked_by
                        .entry(review.username.clone())
                        .or_default()
                        .insert(title.clone());
                }
            }
            by_title.insert(title, reviews);
        }

        debug!(
            movies = by_title.len(),
            reviewers = liked_by.len(),
            "review index built"
        );
        Self { by_title, liked_by }
    }

    /// Reviews recorded for one movie.
    pub fn reviews_for(&self, title: &str) -> &[Review] {
        self.by_title.get(title).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Titles `username` rated highly, as an owned set.
    pub fn highly_rated(&self, username: &str) -> HashSet<String> {
        self.liked_by.get(username).cloned().unwrap_or_default()
    }

    /// Collaborative score for a candidate: "people who rated this movie
    /// highly also rated movies you rated highly."
    ///
    /// ## Algorithm
    /// For every review of the candidate with rating >= 4, intersect that
    /// reviewer's highly-rated titles with the current user's set and add
    /// 15 points per overlapping title. The running total is capped at 50.
    /// Returns 0 when the user has no highly-rated titles or the candidate
    /// has no reviews.
    pub fn collaborative_score(&self, title: &str, user_highly_rated: &HashSet<String>) -> f64 {
        if user_highly_rated.is_empty() {
            return 0.0;
        }
        let reviews = match self.by_title.get(title) {
            Some(reviews) => reviews,
            None => return 0.0,
        };

        let mut total = 0.0;
        for review in reviews {
            if review.rating < HIGH_RATING_THRESHOLD {
                continue;
            }
            let overlap = self
                .liked_by
                .get(&review.username)
                .map(|likes| likes.intersection(user_highly_rated).count())
                .unwrap_or(0);
            total += overlap as f64 * OVERLAP_WEIGHT;
        }

        total.min(COLLABORATIVE_CAP)
    }
}
