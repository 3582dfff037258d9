//! Typed facade over the raw key-value store.
//!
//! All decoding happens here, at the store boundary. A value that fails to
//! parse makes its key read as absent: the scan logs a warning, skips the
//! key, and continues. Review lists are additionally sanitized so that
//! out-of-range ratings never reach scoring.

use crate::error::{Result, StoreError};
use crate::keys;
use crate::kv::KvStore;
use crate::records::{CollectionItem, Review, UserAccount};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Typed access to per-user collections, reviews, accounts, and the
/// session key.
#[derive(Debug)]
pub struct UserData<S> {
    store: S,
}

impl<S: KvStore> UserData<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Username of the logged-in user, if any.
    pub fn current_user(&self) -> Option<String> {
        self.store.get(keys::CURRENT_USER_KEY)
    }

    pub fn set_current_user(&self, username: &str) -> Result<()> {
        self.store.set(keys::CURRENT_USER_KEY, username)
    }

    pub fn clear_current_user(&self) -> Result<()> {
        self.store.remove(keys::CURRENT_USER_KEY)
    }

    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    pub fn account(&self, username: &str) -> Option<UserAccount> {
        self.decode_value(&keys::user_key(username))
    }

    pub fn put_account(&self, account: &UserAccount) -> Result<()> {
        self.encode_value(&keys::user_key(&account.username), account)
    }

    // ------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------

    /// The user's collection; empty when absent or malformed.
    pub fn collection(&self, username: &str) -> Vec<CollectionItem> {
        self.decode_list(&keys::collection_key(username))
    }

    pub fn put_collection(&self, username: &str, items: &[CollectionItem]) -> Result<()> {
        self.encode_value(&keys::collection_key(username), &items)
    }

    // ------------------------------------------------------------------
    // Reviews
    // ------------------------------------------------------------------

    /// Reviews recorded for one movie, sanitized to the 1-5 rating range.
    pub fn reviews_for(&self, title: &str) -> Vec<Review> {
        let mut reviews: Vec<Review> = self.decode_list(&keys::reviews_key(title));
        reviews.retain(Review::rating_in_range);
        reviews
    }

    /// Append a review to a movie's list.
    pub fn append_review(&self, title: &str, review: Review) -> Result<()> {
        let mut reviews = self.reviews_for(title);
        reviews.push(review);
        self.encode_value(&keys::reviews_key(title), &reviews)
    }

    /// Every movie's review list, one pass over the `reviews:` prefix.
    ///
    /// This is the system-wide scan collaborative filtering depends on;
    /// malformed lists are skipped, not fatal.
    pub fn all_reviews(&self) -> Vec<(String, Vec<Review>)> {
        self.store
            .keys_with_prefix(keys::REVIEWS_PREFIX)
            .into_iter()
            .filter_map(|key| {
                let title = keys::title_from_reviews_key(&key)?.to_string();
                let reviews = self.reviews_for(&title);
                Some((title, reviews))
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Boundary codecs
    // ------------------------------------------------------------------

    fn decode_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, %err, "skipping malformed record");
                None
            }
        }
    }

    fn decode_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.decode_value(key).unwrap_or_default()
    }

    fn encode_value<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &raw)
    }
}
