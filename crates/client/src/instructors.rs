//! Instructor endpoints.

use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// List all instructors.
    pub async fn instructors(&self) -> Result<Vec<JsonValue>, ClientError> {
        let request = self.request(Method::GET, "/instructors");
        self.execute(request).await
    }

    /// Fetch one instructor.
    pub async fn instructor(&self, id: i64) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::GET, &format!("/instructors/{id}"));
        self.execute(request).await
    }

    /// Create an instructor.
    pub async fn create_instructor(
        &self,
        instructor: &JsonValue,
    ) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::POST, "/instructors").json(instructor);
        self.execute(request).await
    }
}
