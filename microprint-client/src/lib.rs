//! Microprint HTTP Client
//!
//! A small, type-safe client for the GitHub Actions REST API, limited to the
//! calls needed to pull a job's log out of a workflow run.
//!
//! # Example
//!
//! ```no_run
//! use microprint_client::GitHubClient;
//! use microprint_core::domain::repository::{Repository, Token};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repository: Repository = "octo-org/octo-repo".parse()?;
//!     let token = Token::new("ghp_example");
//!     let client = GitHubClient::new("https://api.github.com", repository, token);
//!
//!     for job in client.list_run_jobs(29679449).await? {
//!         println!("{} -> {}", job.name, job.id);
//!     }
//!     Ok(())
//! }
//! ```

mod api;
pub mod error;
mod jobs;

// Re-export commonly used types
pub use api::ActionsApi;
pub use error::{ClientError, Result};

use microprint_core::domain::repository::{Repository, Token};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default API host used outside GitHub Enterprise Server
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type requesting the JSON variant of the API
const ACCEPT_JSON: &str = "application/vnd.github+json";

/// GitHub rejects requests without a user agent
const USER_AGENT_VALUE: &str = concat!("microprint-action/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Actions endpoints of a single repository
///
/// Every request is sent to `{api_url}/repos/{owner}/{repo}/actions/{path}`
/// with the token in the `Authorization` header.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// `{api_url}/repos/{owner}/{repo}/actions/`
    base_url: String,
    /// Credential sent with each request; redacted in `Debug`
    token: Token,
    /// HTTP client instance
    client: Client,
}

impl GitHubClient {
    /// Create a new client for `repository`
    ///
    /// # Arguments
    /// * `api_url` - API root, e.g. "https://api.github.com"
    /// * `repository` - The repository whose workflow runs are queried
    /// * `token` - Credential used for every request
    pub fn new(api_url: impl Into<String>, repository: Repository, token: Token) -> Self {
        Self::with_client(api_url, repository, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        api_url: impl Into<String>,
        repository: Repository,
        token: Token,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            base_url: format!(
                "{}/repos/{}/{}/actions/",
                api_url.trim_end_matches('/'),
                repository.owner,
                repository.name
            ),
            token,
            client,
        }
    }

    /// Get the base URL all request paths are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Requests
    // =============================================================================

    /// Issue an authenticated GET for `path`, relative to the actions base URL
    ///
    /// Transport failures and non-2xx statuses are returned as errors; the
    /// successful response is handed back untouched.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("token {}", self.token.expose()))
            .header(ACCEPT, ACCEPT_JSON)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(path, status.as_u16(), error_text));
        }

        Ok(response)
    }

    /// GET `path` and deserialize the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_bytes(path).await?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Parse {
            path: path.to_string(),
            message: format!("Failed to parse JSON response: {}", e),
        })
    }

    /// GET `path` and return the body exactly as sent, without charset
    /// decoding
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.get(path).await?;
        let body = response.bytes().await.map_err(|source| ClientError::Request {
            path: path.to_string(),
            source,
        })?;

        Ok(body.to_vec())
    }
}
