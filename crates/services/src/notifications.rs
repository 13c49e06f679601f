//! Role-scoped notification access.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::warn;

use labsched_client::notifications::{NotificationFilter, NotificationScope, NotificationSort};
use labsched_client::ApiClient;
use labsched_core::CredentialStore;

use crate::error::ServiceError;

/// Notification feeds with the session's identity filled in.
///
/// Read methods degrade to empty defaults on any failure, including a
/// missing session, so views render an empty feed instead of an error.
/// Mutations propagate errors.
///
/// The generic methods address the current user's feed; the `dean_*` and
/// `acad_coor_*` methods address the role feeds, which the backend resolves
/// to their role's account without a user id.
pub struct NotificationService {
    client: ApiClient,
    store: Arc<CredentialStore>,
}

impl NotificationService {
    pub fn new(client: ApiClient, store: Arc<CredentialStore>) -> Self {
        Self { client, store }
    }

    fn user_id(&self) -> Option<String> {
        self.store.read().map(|record| record.user.id)
    }

    async fn fetch(
        &self,
        scope: NotificationScope,
        user_id: Option<&str>,
        filter: &NotificationFilter,
        sort: NotificationSort,
    ) -> Vec<JsonValue> {
        match self.client.notifications(scope, user_id, filter, sort).await {
            Ok(items) => items,
            Err(err) => {
                warn!("fetching notifications failed: {err}");
                Vec::new()
            }
        }
    }

    async fn count(&self, scope: NotificationScope, user_id: Option<&str>) -> u64 {
        match self.client.unread_notification_count(scope, user_id).await {
            Ok(unread) => unread.count,
            Err(err) => {
                warn!("fetching unread count failed: {err}");
                0
            }
        }
    }

    /// The current user's notifications. Empty when logged out.
    pub async fn notifications(
        &self,
        filter: &NotificationFilter,
        sort: NotificationSort,
    ) -> Vec<JsonValue> {
        let Some(user_id) = self.user_id() else {
            warn!("notification fetch skipped, no active session");
            return Vec::new();
        };
        self.fetch(NotificationScope::User, Some(&user_id), filter, sort)
            .await
    }

    /// The current user's unread count. Zero when logged out.
    pub async fn unread_count(&self) -> u64 {
        let Some(user_id) = self.user_id() else {
            return 0;
        };
        self.count(NotificationScope::User, Some(&user_id)).await
    }

    /// Mark one of the current user's notifications as read.
    pub async fn mark_read(&self, notification_id: i64) -> Result<JsonValue, ServiceError> {
        let user_id = self.user_id().ok_or(ServiceError::UserIdRequired)?;
        Ok(self
            .client
            .mark_notification_read(NotificationScope::User, Some(&user_id), notification_id)
            .await?)
    }

    /// Mark all of the current user's notifications as read.
    pub async fn mark_all_read(&self) -> Result<JsonValue, ServiceError> {
        let user_id = self.user_id().ok_or(ServiceError::UserIdRequired)?;
        Ok(self
            .client
            .mark_all_notifications_read(NotificationScope::User, Some(&user_id))
            .await?)
    }

    /// Permanently delete all of the current user's notifications.
    pub async fn clear_all(&self) -> Result<JsonValue, ServiceError> {
        let user_id = self.user_id().ok_or(ServiceError::UserIdRequired)?;
        Ok(self
            .client
            .clear_all_notifications(NotificationScope::User, Some(&user_id))
            .await?)
    }

    /// The Dean feed. Empty on any failure.
    pub async fn dean_notifications(
        &self,
        filter: &NotificationFilter,
        sort: NotificationSort,
    ) -> Vec<JsonValue> {
        self.fetch(NotificationScope::Dean, None, filter, sort).await
    }

    /// Unread count of the Dean feed.
    pub async fn dean_unread_count(&self) -> u64 {
        self.count(NotificationScope::Dean, None).await
    }

    /// Mark one Dean notification as read.
    pub async fn mark_dean_read(&self, notification_id: i64) -> Result<JsonValue, ServiceError> {
        Ok(self
            .client
            .mark_notification_read(NotificationScope::Dean, None, notification_id)
            .await?)
    }

    /// Mark the whole Dean feed as read.
    pub async fn mark_all_dean_read(&self) -> Result<JsonValue, ServiceError> {
        Ok(self
            .client
            .mark_all_notifications_read(NotificationScope::Dean, None)
            .await?)
    }

    /// Permanently delete the Dean feed.
    pub async fn clear_all_dean(&self) -> Result<JsonValue, ServiceError> {
        Ok(self
            .client
            .clear_all_notifications(NotificationScope::Dean, None)
            .await?)
    }

    /// The Academic Coordinator feed. Empty on any failure.
    pub async fn acad_coor_notifications(
        &self,
        filter: &NotificationFilter,
        sort: NotificationSort,
    ) -> Vec<JsonValue> {
        self.fetch(NotificationScope::AcademicCoordinator, None, filter, sort)
            .await
    }

    /// Unread count of the Academic Coordinator feed.
    pub async fn acad_coor_unread_count(&self) -> u64 {
        self.count(NotificationScope::AcademicCoordinator, None).await
    }

    /// Mark one Academic Coordinator notification as read.
    pub async fn mark_acad_coor_read(
        &self,
        notification_id: i64,
    ) -> Result<JsonValue, ServiceError> {
        Ok(self
            .client
            .mark_notification_read(NotificationScope::AcademicCoordinator, None, notification_id)
            .await?)
    }

    /// Mark the whole Academic Coordinator feed as read.
    pub async fn mark_all_acad_coor_read(&self) -> Result<JsonValue, ServiceError> {
        Ok(self
            .client
            .mark_all_notifications_read(NotificationScope::AcademicCoordinator, None)
            .await?)
    }

    /// Permanently delete the Academic Coordinator feed.
    pub async fn clear_all_acad_coor(&self) -> Result<JsonValue, ServiceError> {
        Ok(self
            .client
            .clear_all_notifications(NotificationScope::AcademicCoordinator, None)
            .await?)
    }
}
