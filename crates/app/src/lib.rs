//! # App Crate
//!
//! Session-oriented orchestration on top of the store and the engine.
//!
//! [`App`] wires the loaded catalog and the user data store together and
//! exposes every user-facing operation: signup/login/logout, collection
//! reads and mutations, review capture, and recommendation generation.
//! There is no ambient session state: the current user lives under a
//! store key, and recommendations are recomputed from scratch on every
//! request, so mutations never leave a stale cache behind and multiple
//! [`App`] instances can coexist in one process.

pub mod auth;
pub mod collection;
pub mod error;
pub mod recommend;

pub use collection::{AddOutcome, RemoveOutcome};
pub use error::{AppError, Result};
pub use recommend::Recommendations;

use engine::Jitter;
use std::sync::Arc;
use store::{Catalog, KvStore, UserData};

/// One running instance of the application: a fully loaded catalog plus a
/// user data store.
pub struct App<S> {
    catalog: Arc<Catalog>,
    data: UserData<S>,
    jitter: Jitter,
}

impl<S: KvStore> App<S> {
    pub fn new(catalog: Arc<Catalog>, store: S) -> Self {
        Self {
            catalog,
            data: UserData::new(store),
            jitter: Jitter::entropy(),
        }
    }

    /// Configure the jitter source used for recommendations (builder
    /// pattern). Tests and the CLI's `--seed` flag use this for
    /// reproducible output.
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn data(&self) -> &UserData<S> {
        &self.data
    }

    pub(crate) fn catalog_arc(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub(crate) fn jitter(&self) -> Jitter {
        self.jitter
    }

    /// Username required by an operation, or [`AppError::AuthRequired`].
    pub(crate) fn require_user(&self) -> Result<String> {
        self.data.current_user().ok_or(AppError::AuthRequired)
    }
}
