//! Ranking, filtering, and the rendering boundary.
//!
//! Scored candidates are sorted descending by total score; ties are
//! effectively random because the jitter component is already baked in.
//! An optional equality filter on MPAA class narrows the ranked list
//! without reordering it, and the top of the list is shaped into display
//! cards for whatever front end consumes them.

use crate::scoring::ScoredCandidate;
use std::cmp::Ordering;

/// How many recommendations are exposed for display.
pub const DISPLAY_LIMIT: usize = 12;

/// How many reasons each displayed recommendation carries.
pub const REASON_LIMIT: usize = 3;

/// The filter control surface: everything, or one MPAA class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingFilter {
    All,
    Class(String),
}

impl RatingFilter {
    /// Parse a raw filter value; `"all"` (case-insensitive) means no
    /// filter, anything else is an MPAA class.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            RatingFilter::All
        } else {
            RatingFilter::Class(raw.to_string())
        }
    }

    pub fn matches(&self, rating: Option<&str>) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Class(class) => rating == Some(class.as_str()),
        }
    }
}

/// What the rendering boundary receives for each recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    pub title: String,
    pub rating: Option<String>,
    pub runtime: Option<u32>,
    /// Raw score rounded and clamped to [0, 100].
    pub match_percent: u8,
    /// Top reasons only, in evaluation order.
    pub reasons: Vec<String>,
    pub poster_path: String,
}

impl RecommendationCard {
    fn from_candidate(candidate: &ScoredCandidate) -> Self {
        Self {
            title: candidate.title.clone(),
            rating: candidate.rating.clone(),
            runtime: candidate.runtime,
            match_percent: match_percent(candidate.score),
            reasons: candidate.reasons.iter().take(REASON_LIMIT).cloned().collect(),
            poster_path: poster_path(&candidate.title),
        }
    }
}

/// Sort candidates descending by score.
pub fn rank(mut candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}

/// Apply the rating filter to an already-ranked list and shape the top of
/// it for display. Relative order is preserved.
pub fn top_picks(ranked: &[ScoredCandidate], filter: &RatingFilter) -> Vec<RecommendationCard> {
    ranked
        .iter()
        .filter(|candidate| filter.matches(candidate.rating.as_deref()))
        .take(DISPLAY_LIMIT)
        .map(RecommendationCard::from_candidate)
        .collect()
}

/// Display-facing normalization of a raw score.
pub fn match_percent(score: f64) -> u8 {
    (score.round() as i64).clamp(0, 100) as u8
}

/// Derived poster location for a title.
pub fn poster_path(title: &str) -> String {
    format!("images/{title}.png")
}
