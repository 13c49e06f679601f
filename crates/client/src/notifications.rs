//! Notification endpoints, parametrized by feed scope.

use reqwest::{Method, RequestBuilder};
use serde_json::{json, Value as JsonValue};

use crate::client::{ApiClient, X_USER_ID};
use crate::error::ClientError;
use crate::types::UnreadCount;

/// Which notification feed a call addresses.
///
/// The generic feed identifies its user explicitly (query parameter plus a
/// redundant `X-User-ID` header); the Dean and Academic Coordinator feeds
/// are resolved to their role's account server-side and take no user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationScope {
    User,
    Dean,
    AcademicCoordinator,
}

impl NotificationScope {
    /// Path prefix of this feed's endpoints.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Self::User => "/notifications",
            Self::Dean => "/dean-notifications",
            Self::AcademicCoordinator => "/acad-coor-notifications",
        }
    }
}

/// Server-side filter over a notification feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    /// Restrict to notifications about one subject, e.g. `schedule`.
    Related(String),
}

impl NotificationFilter {
    fn as_param(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Related(subject) => subject,
        }
    }
}

/// Feed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationSort {
    #[default]
    Newest,
    Oldest,
}

impl NotificationSort {
    fn as_param(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }
}

fn with_user_identity(request: RequestBuilder, user_id: Option<&str>) -> RequestBuilder {
    match user_id {
        Some(id) => request.query(&[("user_id", id)]).header(X_USER_ID, id),
        None => request,
    }
}

impl ApiClient {
    /// List a feed's notifications, filtered and sorted server-side.
    pub async fn notifications(
        &self,
        scope: NotificationScope,
        user_id: Option<&str>,
        filter: &NotificationFilter,
        sort: NotificationSort,
    ) -> Result<Vec<JsonValue>, ClientError> {
        let request = self
            .request(Method::GET, scope.path_prefix())
            .query(&[("filter_type", filter.as_param()), ("sort_by", sort.as_param())]);
        self.execute(with_user_identity(request, user_id)).await
    }

    /// Mark one notification as read.
    pub async fn mark_notification_read(
        &self,
        scope: NotificationScope,
        user_id: Option<&str>,
        notification_id: i64,
    ) -> Result<JsonValue, ClientError> {
        let path = format!("{}/{notification_id}/read", scope.path_prefix());
        let request = self.request(Method::PATCH, &path).json(&json!({}));
        self.execute(with_user_identity(request, user_id)).await
    }

    /// Mark every notification in the feed as read.
    pub async fn mark_all_notifications_read(
        &self,
        scope: NotificationScope,
        user_id: Option<&str>,
    ) -> Result<JsonValue, ClientError> {
        let path = format!("{}/read-all", scope.path_prefix());
        let request = self.request(Method::PATCH, &path).json(&json!({}));
        self.execute(with_user_identity(request, user_id)).await
    }

    /// Number of unread notifications in the feed.
    pub async fn unread_notification_count(
        &self,
        scope: NotificationScope,
        user_id: Option<&str>,
    ) -> Result<UnreadCount, ClientError> {
        let path = format!("{}/unread-count", scope.path_prefix());
        let request = self.request(Method::GET, &path);
        self.execute(with_user_identity(request, user_id)).await
    }

    /// Delete every notification in the feed.
    pub async fn clear_all_notifications(
        &self,
        scope: NotificationScope,
        user_id: Option<&str>,
    ) -> Result<JsonValue, ClientError> {
        let path = format!("{}/clear-all", scope.path_prefix());
        let request = self.request(Method::DELETE, &path);
        self.execute(with_user_identity(request, user_id)).await
    }
}
