//! Typed records stored in the user data store.
//!
//! Records cross the store boundary as JSON lists or objects. Optional
//! fields are explicit `Option`s rather than dynamically-shaped blobs;
//! anything that fails to decode is handled at the boundary in
//! `user_data`, not deep in scoring logic.

use serde::{Deserialize, Serialize};

/// Rating values accepted on a review (star count)
pub const MIN_REVIEW_RATING: u8 = 1;
pub const MAX_REVIEW_RATING: u8 = 5;

/// An account record, stored under `user:{username}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// One movie saved in a user's collection.
///
/// Membership is tested by title equality; the poster path is derived
/// display data and may be absent on records written by older clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

/// One review of a movie. The movie title is implicit from the storage key.
///
/// Multiple reviews per movie are allowed, as are multiple reviews by the
/// same user; no uniqueness constraint is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub username: String,
    /// Star rating, 1-5
    pub rating: u8,
    #[serde(default)]
    pub text: String,
    /// RFC 3339 timestamp of when the review was written
    pub date: String,
}

impl Review {
    /// Whether the rating is inside the 1-5 contract.
    ///
    /// Out-of-range ratings are dropped when a review list is decoded, so
    /// scoring never sees them.
    pub fn rating_in_range(&self) -> bool {
        (MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&self.rating)
    }
}
