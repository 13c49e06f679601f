//! Authentication and forced-logout endpoints.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::{json, Value as JsonValue};

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{ForcedLogoutCheck, LoginRequest, LoginResponse};

impl ApiClient {
    /// Exchange credentials for a session token.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let request = self.request(Method::POST, "/login").json(credentials);
        self.execute(request).await
    }

    /// Flag another user's sessions for forced logout. Administrative.
    pub async fn force_logout(&self, user_id: &str) -> Result<JsonValue, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/users/{user_id}/force-logout"))
            .json(&json!({}));
        self.execute(request).await
    }

    /// Ask the backend whether this account was mutated by an administrator
    /// since `last_auth_time`.
    pub async fn check_forced_logout(
        &self,
        user_id: &str,
        last_auth_time: Option<DateTime<Utc>>,
    ) -> Result<ForcedLogoutCheck, ClientError> {
        let mut request =
            self.request(Method::GET, &format!("/users/{user_id}/check-forced-logout"));
        if let Some(at) = last_auth_time {
            request = request.query(&[("last_auth_time", at.to_rfc3339())]);
        }
        self.execute(request).await
    }
}
