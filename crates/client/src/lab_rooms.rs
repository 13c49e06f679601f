//! Lab room endpoints.

use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// List all lab rooms.
    pub async fn lab_rooms(&self) -> Result<Vec<JsonValue>, ClientError> {
        let request = self.request(Method::GET, "/lab-rooms");
        self.execute(request).await
    }

    /// Fetch one lab room.
    pub async fn lab_room(&self, id: i64) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::GET, &format!("/lab-rooms/{id}"));
        self.execute(request).await
    }
}
