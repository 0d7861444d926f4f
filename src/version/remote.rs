//! HTTP access to the remote version file

use tracing::warn;

use crate::config::USER_AGENT;
use crate::version::error::FetchError;

/// HTTP client for retrieving version files
pub struct VersionFileClient {
    client: reqwest::Client,
}

impl VersionFileClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Fetches the version file at `url` as text.
    ///
    /// One GET per call; nothing is cached between calls. Transport
    /// failures and 4xx/5xx statuses are both fetch errors.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            warn!("version file fetch returned status {}: {}", status, url);
            return Err(FetchError::Status { status });
        }

        Ok(response.text().await?)
    }
}

impl Default for VersionFileClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_returns_the_response_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version.ini")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body("[release]\nversion = 1.2.3\n")
            .create_async()
            .await;

        let client = VersionFileClient::new();
        let content = client
            .fetch(&format!("{}/version.ini", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(content, "[release]\nversion = 1.2.3\n");
    }

    #[tokio::test]
    async fn fetch_returns_status_error_for_404() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/missing.ini")
            .with_status(404)
            .with_body("not here")
            .create_async()
            .await;

        let client = VersionFileClient::new();
        let result = client.fetch(&format!("{}/missing.ini", server.url())).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status }) if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn fetch_returns_status_error_for_500() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/version.ini")
            .with_status(500)
            .create_async()
            .await;

        let client = VersionFileClient::new();
        let result = client.fetch(&format!("{}/version.ini", server.url())).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::Status { .. })));
    }

    #[tokio::test]
    async fn fetch_returns_network_error_for_invalid_url() {
        let client = VersionFileClient::new();

        let result = client.fetch("not a url").await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn fetch_returns_network_error_for_unreachable_host() {
        let client = VersionFileClient::new();

        let result = client.fetch("http://127.0.0.1:1/version.ini").await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
