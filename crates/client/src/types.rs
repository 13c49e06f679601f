//! Wire types shared with the scheduling backend.
//!
//! Only payloads whose shape the client logic depends on are typed here.
//! Rows owned by the backend (schedule listings, notifications, user
//! records) travel as [`serde_json::Value`] so backend columns can change
//! without breaking the SDK.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use labsched_core::Role;

/// Credentials for `POST /login`. The backend accepts an account id or an
/// email address in `id_or_email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub id_or_email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(id_or_email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id_or_email: id_or_email.into(),
            password: password.into(),
        }
    }
}

/// Successful login payload: the token plus the profile snapshot that gets
/// persisted beside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub requires_approval: bool,
    pub is_approved: bool,
    pub is_active: bool,
}

/// Result of `GET /users/{id}/check-forced-logout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForcedLogoutCheck {
    pub should_logout: bool,
    /// When the server recorded the forcing change. Absent when nothing
    /// forced a logout. The backend writes this as a naive ISO 8601 string
    /// with no offset; it is read as UTC.
    #[serde(default, deserialize_with = "utc_or_naive_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Current account facts, reported whether or not a logout is forced.
    #[serde(default)]
    pub user_info: Option<ForcedLogoutUserInfo>,
}

/// Account facts attached to a forced-logout check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForcedLogoutUserInfo {
    #[serde(default)]
    pub id: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

fn utc_or_naive_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|at| Some(at.and_utc()))
        .map_err(serde::de::Error::custom)
}

/// Result of the unread-count notification endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

/// Result of the user listing endpoints (`/users/all`, `/users/approved`,
/// `/users/pending-approval`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<serde_json::Value>,
}

/// Lifecycle state of a schedule row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Draft,
    Pending,
    Approved,
}

impl ScheduleStatus {
    /// Wire string, as used in paths and JSON bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `PATCH /schedules/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleStatusUpdate {
    pub status: ScheduleStatus,
}

/// Body of `PATCH /schedules/bulk-status-update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkScheduleStatusUpdate {
    pub schedule_ids: Vec<i64>,
    pub status: ScheduleStatus,
    pub semester_id: Option<i64>,
}

/// Create/update body for a schedule row.
///
/// `second_day` always serializes, as an explicit `null` when absent, and
/// `schedule_types` is always an array. The update handler rejects bodies
/// that drop either shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub semester_id: i64,
    pub section: String,
    pub course_code: String,
    pub course_name: String,
    pub day: String,
    #[serde(default)]
    pub second_day: Option<String>,
    pub lab_room_id: i64,
    pub instructor_name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub schedule_types: Vec<String>,
    pub class_type: String,
    #[serde(default)]
    pub status: ScheduleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl ScheduleDraft {
    /// Body for `PUT /schedules/{id}`: an embedded id matching the path is
    /// dropped so the path stays authoritative.
    pub(crate) fn normalized_for_update(&self, path_id: i64) -> Self {
        let mut body = self.clone();
        if body.id == Some(path_id) {
            body.id = None;
        }
        body
    }
}

/// Body of `PUT /system-settings/{key}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSettingUpdate {
    pub setting_value: String,
    pub description: Option<String>,
}

/// Body of `PUT /users/{id}/role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub role: Role,
}
