//! Per-candidate scoring.
//!
//! The score is a sum of non-negative components evaluated in a fixed
//! order. The order only fixes the `reasons` list; the total is
//! order-independent.

use crate::jitter::Jitter;
use crate::profile::PreferenceProfile;
use crate::review_index::ReviewIndex;
use store::CatalogEntry;

/// Points per owned movie sharing the candidate's MPAA class.
pub const RATING_AFFINITY_WEIGHT: f64 = 20.0;

/// Runtime-similarity tiers: within 20 minutes of the user's average is
/// worth 30 points (with a reason), within 40 is worth 15 (silently).
pub const RUNTIME_CLOSE_WINDOW: f64 = 20.0;
pub const RUNTIME_CLOSE_BONUS: f64 = 30.0;
pub const RUNTIME_NEAR_WINDOW: f64 = 40.0;
pub const RUNTIME_NEAR_BONUS: f64 = 15.0;

/// One catalog movie scored against a user's preference profile.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub title: String,
    pub runtime: Option<u32>,
    pub rating: Option<String>,
    pub score: f64,
    /// Human-readable score contributions, in evaluation order.
    pub reasons: Vec<String>,
}

/// Score one non-owned catalog entry.
///
/// ## Algorithm
/// - Rating-class affinity: `owned count in class * 20`
/// - Runtime similarity: tiered on distance from the profile's average
///   runtime, only when both sides have runtime data
/// - Collaborative: capped overlap signal from the review index
/// - Jitter: uniform [0, 5), unconditional, never a reason
pub fn score_candidate(
    title: &str,
    entry: &CatalogEntry,
    profile: &PreferenceProfile,
    index: &ReviewIndex,
    jitter: &Jitter,
) -> ScoredCandidate {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if let Some(rating) = entry.rating.as_deref() {
        if let Some(&count) = profile.rating_counts.get(rating) {
            score += count as f64 * RATING_AFFINITY_WEIGHT;
            reasons.push(format!("Matches your preferred {rating} rating"));
        }
    }

    if profile.average_runtime > 0.0 {
        if let Some(runtime) = entry.runtime {
            let diff = (runtime as f64 - profile.average_runtime).abs();
            if diff < RUNTIME_CLOSE_WINDOW {
                score += RUNTIME_CLOSE_BONUS;
                reasons.push("Similar runtime to your favorites".to_string());
            } else if diff < RUNTIME_NEAR_WINDOW {
                // Near tier scores but is not worth surfacing to the user.
                score += RUNTIME_NEAR_BONUS;
            }
        }
    }

    let collaborative = index.collaborative_score(title, &profile.highly_rated);
    if collaborative > 0.0 {
        score += collaborative;
        reasons.push("Liked by users with similar taste".to_string());
    }

    score += jitter.sample(title);

    ScoredCandidate {
        title: title.to_string(),
        runtime: entry.runtime,
        rating: entry.rating.clone(),
        score,
        reasons,
    }
}
