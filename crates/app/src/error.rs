//! Error types for user-facing operations.
//!
//! Every variant here is recoverable and maps to a message the front end
//! can show as-is. Unknown-user and wrong-password collapse into one
//! variant so login failures do not leak which usernames exist.

use store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The operation needs a logged-in user
    #[error("no user is logged in")]
    AuthRequired,

    /// Signup with an empty username or password
    #[error("please fill in all fields")]
    MissingFields,

    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("username already exists")]
    UsernameTaken,

    #[error("invalid username or password")]
    InvalidCredentials,

    /// Review rating outside the 1-5 contract
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// Reviews are attached to owned movies only
    #[error("\"{0}\" is not in your collection")]
    NotInCollection(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, AppError>;
