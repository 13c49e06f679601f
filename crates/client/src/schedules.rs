//! Schedule endpoints.

use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{BulkScheduleStatusUpdate, ScheduleDraft, ScheduleStatus, ScheduleStatusUpdate};

impl ApiClient {
    /// List schedules, optionally restricted to one semester.
    pub async fn schedules(&self, semester_id: Option<i64>) -> Result<Vec<JsonValue>, ClientError> {
        let mut request = self.request(Method::GET, "/schedules");
        if let Some(id) = semester_id {
            request = request.query(&[("semester_id", id)]);
        }
        self.execute(request).await
    }

    /// List schedules in one lifecycle state.
    pub async fn schedules_by_status(
        &self,
        status: ScheduleStatus,
    ) -> Result<Vec<JsonValue>, ClientError> {
        let request = self.request(Method::GET, &format!("/schedules/status/{status}"));
        self.execute(request).await
    }

    /// Create a schedule row.
    pub async fn create_schedule(&self, draft: &ScheduleDraft) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::POST, "/schedules").json(draft);
        self.execute(request).await
    }

    /// Replace a schedule row.
    pub async fn update_schedule(
        &self,
        id: i64,
        draft: &ScheduleDraft,
    ) -> Result<JsonValue, ClientError> {
        let body = draft.normalized_for_update(id);
        let request = self.request(Method::PUT, &format!("/schedules/{id}")).json(&body);
        self.execute(request).await
    }

    /// Move one schedule to a new lifecycle state.
    pub async fn update_schedule_status(
        &self,
        id: i64,
        status: ScheduleStatus,
    ) -> Result<JsonValue, ClientError> {
        let request = self
            .request(Method::PATCH, &format!("/schedules/{id}/status"))
            .json(&ScheduleStatusUpdate { status });
        self.execute(request).await
    }

    /// Move a batch of schedules to a new lifecycle state.
    pub async fn update_schedules_status_bulk(
        &self,
        update: &BulkScheduleStatusUpdate,
    ) -> Result<JsonValue, ClientError> {
        let request = self
            .request(Method::PATCH, "/schedules/bulk-status-update")
            .json(update);
        self.execute(request).await
    }

    /// Delete one schedule row.
    pub async fn delete_schedule(&self, id: i64) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::DELETE, &format!("/schedules/{id}"));
        self.execute(request).await
    }

    /// Delete every schedule row.
    pub async fn delete_all_schedules(&self) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::DELETE, "/schedules/all");
        self.execute(request).await
    }
}
