//! # Store Crate
//!
//! This crate owns the two data sources the recommendation engine treats as
//! opaque collaborators:
//!
//! - **Catalog store**: a static JSON document mapping movie title to
//!   runtime and MPAA rating, loaded once per session.
//! - **User data store**: a keyed string store holding per-user collections,
//!   per-movie review lists, and account records.
//!
//! ## Main Components
//!
//! - **catalog**: [`Catalog`] and [`CatalogEntry`]
//! - **kv**: the [`KvStore`] trait plus in-memory and file-backed backends
//! - **records**: typed records ([`CollectionItem`], [`Review`],
//!   [`UserAccount`]) that cross the store boundary as JSON
//! - **user_data**: [`UserData`], the typed facade that validates records
//!   at the boundary
//! - **error**: error types for store operations
//!
//! ## Example Usage
//!
//! ```ignore
//! use store::{Catalog, MemoryStore, UserData};
//!
//! let catalog = Catalog::load(Path::new("data/movies.json")).await;
//! let data = UserData::new(MemoryStore::new());
//!
//! let collection = data.collection("ada");
//! println!("ada owns {} movies", collection.len());
//! ```

// Public modules
pub mod catalog;
pub mod error;
pub mod keys;
pub mod kv;
pub mod records;
pub mod user_data;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogEntry, UNKNOWN_RATING};
pub use error::{Result, StoreError};
pub use kv::{FileStore, KvStore, MemoryStore};
pub use records::{CollectionItem, Review, UserAccount};
pub use user_data::UserData;
