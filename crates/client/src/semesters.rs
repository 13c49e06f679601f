//! Semester endpoints.

use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// List all semesters.
    pub async fn semesters(&self) -> Result<Vec<JsonValue>, ClientError> {
        let request = self.request(Method::GET, "/semesters");
        self.execute(request).await
    }

    /// Fetch one semester.
    pub async fn semester(&self, id: i64) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::GET, &format!("/semesters/{id}"));
        self.execute(request).await
    }

    /// Create a semester.
    pub async fn create_semester(&self, semester: &JsonValue) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::POST, "/semesters").json(semester);
        self.execute(request).await
    }
}
