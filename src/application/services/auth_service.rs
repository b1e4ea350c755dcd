//! Authentication service backed by the remote user collection.

use std::sync::Arc;

use crate::domain::entities::{PlaceholderHint, UserRecord};
use crate::domain::repositories::UserDirectory;
use crate::error::LoginError;

/// Service for checking entered credentials against the user directory.
///
/// Every call performs one fresh read of the collection; nothing is cached
/// between calls.
pub struct AuthService<R: UserDirectory> {
    directory: Arc<R>,
}

impl<R: UserDirectory> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(directory: Arc<R>) -> Self {
        Self { directory }
    }

    /// Authenticates an email/password pair.
    ///
    /// Scans the collection in order and returns the first record whose
    /// `email` equals `email` and whose `username` equals `password`.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Transport`] if the directory cannot be read and
    /// [`LoginError::AuthMismatch`] if no record matches.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserRecord, LoginError> {
        let users = self.directory.fetch_users().await?;

        match users.into_iter().find(|user| user.matches(email, password)) {
            Some(user) => {
                tracing::info!(email = %user.email, "User authenticated");
                Ok(user)
            }
            None => {
                tracing::info!(email = %email, "No user matches the entered credentials");
                Err(LoginError::AuthMismatch)
            }
        }
    }

    /// Fetches the placeholder hint: the first record's name.
    ///
    /// Failures are logged and produce an empty hint; the hint is cosmetic
    /// and never blocks the form.
    pub async fn placeholder_hint(&self) -> PlaceholderHint {
        match self.directory.fetch_users().await {
            Ok(users) => PlaceholderHint::new(users.into_iter().next().map(|user| user.name)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch placeholder name");
                PlaceholderHint::default()
            }
        }
    }
}
