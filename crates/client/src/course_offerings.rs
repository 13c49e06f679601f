//! Course offering endpoints.

use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// List all course offerings.
    pub async fn course_offerings(&self) -> Result<Vec<JsonValue>, ClientError> {
        let request = self.request(Method::GET, "/course-offerings");
        self.execute(request).await
    }

    /// Fetch one course offering.
    pub async fn course_offering(&self, id: i64) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::GET, &format!("/course-offerings/{id}"));
        self.execute(request).await
    }

    /// Create a course offering.
    pub async fn create_course_offering(
        &self,
        offering: &JsonValue,
    ) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::POST, "/course-offerings").json(offering);
        self.execute(request).await
    }

    /// Replace a course offering.
    pub async fn update_course_offering(
        &self,
        id: i64,
        offering: &JsonValue,
    ) -> Result<JsonValue, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/course-offerings/{id}"))
            .json(offering);
        self.execute(request).await
    }

    /// Delete one course offering.
    pub async fn delete_course_offering(&self, id: i64) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::DELETE, &format!("/course-offerings/{id}"));
        self.execute(request).await
    }

    /// Delete every course offering.
    pub async fn delete_all_course_offerings(&self) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::DELETE, "/course-offerings/all");
        self.execute(request).await
    }
}
