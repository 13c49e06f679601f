//! Request construction and dispatch.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use labsched_core::{AuthToken, TokenSource};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Header carrying the serialized user record for fallback tokens.
pub const X_USER_DATA: &str = "X-User-Data";
/// Header carrying the user id redundantly on user-scoped notification
/// endpoints.
pub const X_USER_ID: &str = "X-User-ID";

/// Client for the LabSched backend API.
///
/// Credentials are read from the injected [`TokenSource`] when each request
/// is built, never cached, so a login or logout that updates the credential
/// store is picked up by the very next call. Without a source (or without a
/// stored session) requests go out unauthenticated and the backend decides
/// whether to reject them.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenSource>>,
}

impl ApiClient {
    /// Create a client for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a client from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Self::builder()
            .base_url(&config.base_url)
            .timeout(Duration::from_secs(config.timeout_secs));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path` with the current credentials attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);

        match self.tokens.as_ref().and_then(|source| source.auth_token()) {
            Some(AuthToken::Bearer(token)) => {
                request = request.header(AUTHORIZATION, format!("Bearer {token}"));
            }
            Some(AuthToken::FallbackWithIdentity { token, identity }) => {
                request = request
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .header(X_USER_DATA, identity);
            }
            None => {}
        }
        request
    }

    /// Dispatch a request and deserialize the JSON response.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            debug!("backend returned {status}: {message}");
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for [`ApiClient`].
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    tokens: Option<Arc<dyn TokenSource>>,
}

impl ApiClientBuilder {
    /// Set the base URL (required). A trailing slash is trimmed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the default user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Attach the source requests read their credentials from.
    pub fn token_source(mut self, source: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(source);
        self
    }

    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".to_string()))?
            .trim_end_matches('/')
            .to_string();

        let mut http = ClientBuilder::new().user_agent(
            self.user_agent
                .unwrap_or_else(|| format!("labsched-client/{}", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(ApiClient {
            http: http.build()?,
            base_url,
            tokens: self.tokens,
        })
    }
}
