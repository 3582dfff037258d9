//! Account creation and session management.
//!
//! Accounts live in the same key-value store as everything else, one
//! record per `user:{username}` key. The store is a local, single-user
//! file, so passwords are stored as written; there is no server side to
//! protect them from.

use crate::error::{AppError, Result};
use crate::App;
use chrono::Utc;
use store::{KvStore, UserAccount};
use tracing::info;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

impl<S: KvStore> App<S> {
    /// Create a new account. Does not log the user in.
    pub fn signup(&self, username: &str, password: &str) -> Result<()> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::MissingFields);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.data().account(username).is_some() {
            return Err(AppError::UsernameTaken);
        }

        self.data().put_account(&UserAccount {
            username: username.to_string(),
            password: password.to_string(),
            created_at: Utc::now().to_rfc3339(),
        })?;
        info!(user = username, "account created");
        Ok(())
    }

    /// Log in and record the session. A missing account and a wrong
    /// password produce the same error.
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        let username = username.trim();
        let account = self
            .data()
            .account(username)
            .ok_or(AppError::InvalidCredentials)?;
        if account.password != password {
            return Err(AppError::InvalidCredentials);
        }

        self.data().set_current_user(username)?;
        info!(user = username, "logged in");
        Ok(())
    }

    /// Clear the session. Logging out while logged out is a no-op.
    pub fn logout(&self) -> Result<()> {
        self.data().clear_current_user()?;
        Ok(())
    }

    /// The logged-in username, if any.
    pub fn current_user(&self) -> Option<String> {
        self.data().current_user()
    }
}
