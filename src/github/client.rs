// GitHub API HTTP client.
// Handles request headers, status checking, and response body decoding.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, GITHUB_API_VERSION};
use crate::error::{GhCacheError, Result};

use super::types::ApiErrorBody;

/// GitHub API client.
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client from the given config.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the environment (see `ClientConfig::from_env`).
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(params).send().await?;

        check_response(endpoint, response).await
    }

    /// GET a JSON document. `None` when the server sent no body.
    pub async fn get_json<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &P,
    ) -> Result<Option<T>> {
        let response = self.get_with_params(endpoint, params).await?;
        let text = response.text().await?;
        parse_body(&text)
    }
}

/// Check response status and convert failures into `GhCacheError::Remote`.
async fn check_response(endpoint: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(remote_error(endpoint, status, &body))
}

/// Build a remote error, preferring GitHub's own message over the reason phrase.
pub(crate) fn remote_error(endpoint: &str, status: StatusCode, body: &str) -> GhCacheError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|err| err.message)
        .ok()
        .filter(|m| !m.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string());

    GhCacheError::Remote {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        message,
    }
}

/// Decode a response body. Empty bodies and JSON `null` decode to `None`.
pub(crate) fn parse_body<T: DeserializeOwned>(text: &str) -> Result<Option<T>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<T>>(text)?)
}
