use super::*;

use reqwest::blocking;
use url::Url;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Fetches the user collection with a single GET.
///
/// There is no timeout and no retry: a request that never completes keeps
/// the caller waiting.
pub struct RemoteUsers {
    pub url: Url,
    client: blocking::Client,
}

impl RemoteUsers {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: blocking::Client::new(),
        }
    }
}

impl UserSource for RemoteUsers {
    fn fetch(&self) -> Result<Vec<User>, AppError> {
        tracing::debug!(url = %self.url, "fetching users");

        let response = self.client.get(self.url.clone()).send()?;

        // Non-success status becomes a `reqwest::Error`, i.e. `AppError::FailedRequest`
        let response = response.error_for_status()?;
        let body = response.text()?;

        let users: Vec<User> = serde_json::from_str(&body)?;
        tracing::info!(count = users.len(), "users fetched");
        Ok(users)
    }
}
