//! HTTP implementation of the user directory.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::entities::UserRecord;
use crate::domain::repositories::UserDirectory;
use crate::error::DirectoryError;

/// Reads the user collection from a JSON endpoint with a single `GET`.
///
/// No timeout or retry is applied on top of the client defaults.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    users_url: String,
}

impl HttpUserDirectory {
    /// Creates a directory reading from `users_url` with a fresh client.
    pub fn new(users_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), users_url)
    }

    /// Creates a directory sharing an existing client.
    pub fn with_client(client: Client, users_url: impl Into<String>) -> Self {
        Self {
            client,
            users_url: users_url.into(),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        let response = self
            .client
            .get(&self.users_url)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let users = response
            .json::<Vec<UserRecord>>()
            .await
            .map_err(|e| DirectoryError::Decode(e.to_string()))?;

        tracing::debug!(count = users.len(), url = %self.users_url, "Fetched user directory");

        Ok(users)
    }
}
