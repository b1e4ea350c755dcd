//! Repository trait for the remote user collection.

use async_trait::async_trait;

use crate::domain::entities::UserRecord;
use crate::error::DirectoryError;

/// Read access to the externally owned user collection.
///
/// The collection is treated as an opaque, ordered list of records. Callers
/// scan it themselves; the directory performs no filtering.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpUserDirectory`] - reads a JSON endpoint over HTTP
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/http_directory.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetches the whole user collection in its remote order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Status`] on a non-success response,
    /// [`DirectoryError::Network`] if the request could not complete, and
    /// [`DirectoryError::Decode`] if the body is not a list of records.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectoryError>;
}
