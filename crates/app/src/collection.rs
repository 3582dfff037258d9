//! Collection reads and mutations, plus review capture.
//!
//! The add operation is idempotent by title: adding a movie that is
//! already present reports [`AddOutcome::AlreadyInCollection`] and leaves
//! the list untouched. Mutations implicitly invalidate any previously
//! generated recommendation list: the next request recomputes from
//! scratch (see `recommend`).

use crate::error::{AppError, Result};
use crate::App;
use chrono::Utc;
use engine::poster_path;
use store::{CollectionItem, KvStore, Review};
use tracing::info;

/// Outcome of an add-to-collection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Membership check hit; nothing was written
    AlreadyInCollection,
}

/// Outcome of a remove-from-collection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotInCollection,
}

impl<S: KvStore> App<S> {
    /// The logged-in user's collection.
    pub fn collection(&self) -> Result<Vec<CollectionItem>> {
        let username = self.require_user()?;
        Ok(self.data().collection(&username))
    }

    /// Add a movie to the collection with a derived poster path.
    pub fn add_to_collection(&self, title: &str) -> Result<AddOutcome> {
        let username = self.require_user()?;
        let mut items = self.data().collection(&username);

        if items.iter().any(|item| item.title == title) {
            return Ok(AddOutcome::AlreadyInCollection);
        }

        items.push(CollectionItem {
            title: title.to_string(),
            poster: Some(poster_path(title)),
        });
        self.data().put_collection(&username, &items)?;
        info!(user = %username, title, "added to collection");
        Ok(AddOutcome::Added)
    }

    /// Remove a movie from the collection by title.
    pub fn remove_from_collection(&self, title: &str) -> Result<RemoveOutcome> {
        let username = self.require_user()?;
        let mut items = self.data().collection(&username);
        let before = items.len();
        items.retain(|item| item.title != title);

        if items.len() == before {
            return Ok(RemoveOutcome::NotInCollection);
        }
        self.data().put_collection(&username, &items)?;
        info!(user = %username, title, "removed from collection");
        Ok(RemoveOutcome::Removed)
    }

    /// Record a review of an owned movie.
    pub fn add_review(&self, title: &str, rating: u8, text: &str) -> Result<()> {
        let username = self.require_user()?;
        if !(1..=5).contains(&rating) {
            return Err(AppError::InvalidRating(rating));
        }
        let owned = self
            .data()
            .collection(&username)
            .iter()
            .any(|item| item.title == title);
        if !owned {
            return Err(AppError::NotInCollection(title.to_string()));
        }

        self.data().append_review(
            title,
            Review {
                username: username.clone(),
                rating,
                text: text.to_string(),
                date: Utc::now().to_rfc3339(),
            },
        )?;
        info!(user = %username, title, rating, "review recorded");
        Ok(())
    }

    /// Reviews recorded for one movie, newest last.
    pub fn reviews_for(&self, title: &str) -> Vec<Review> {
        self.data().reviews_for(title)
    }
}
