//! User administration endpoints.

use reqwest::Method;
use serde_json::{json, Value as JsonValue};

use labsched_core::Role;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{RoleUpdate, UserList};

impl ApiClient {
    /// Fetch a user's profile.
    pub async fn user_profile(&self, user_id: &str) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::GET, &format!("/users/{user_id}/profile"));
        self.execute(request).await
    }

    /// Update a user's profile.
    pub async fn update_user_profile(
        &self,
        user_id: &str,
        profile: &JsonValue,
    ) -> Result<JsonValue, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/users/{user_id}/profile"))
            .json(profile);
        self.execute(request).await
    }

    /// List every user account.
    pub async fn all_users(&self) -> Result<UserList, ClientError> {
        let request = self.request(Method::GET, "/users/all");
        self.execute(request).await
    }

    /// List approved user accounts.
    pub async fn approved_users(&self) -> Result<UserList, ClientError> {
        let request = self.request(Method::GET, "/users/approved");
        self.execute(request).await
    }

    /// List accounts waiting for administrator approval.
    pub async fn pending_approval_users(&self) -> Result<UserList, ClientError> {
        let request = self.request(Method::GET, "/users/pending-approval");
        self.execute(request).await
    }

    /// Change a user's role.
    pub async fn update_user_role(
        &self,
        user_id: &str,
        role: Role,
    ) -> Result<JsonValue, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/users/{user_id}/role"))
            .json(&RoleUpdate { role });
        self.execute(request).await
    }

    /// Deactivate a user account.
    pub async fn deactivate_user(&self, user_id: &str) -> Result<JsonValue, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/users/{user_id}/deactivate"))
            .json(&json!({}));
        self.execute(request).await
    }

    /// Reactivate a user account.
    pub async fn activate_user(&self, user_id: &str) -> Result<JsonValue, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/users/{user_id}/activate"))
            .json(&json!({}));
        self.execute(request).await
    }

    /// Delete a user account.
    pub async fn delete_user(&self, user_id: &str) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::DELETE, &format!("/users/{user_id}"));
        self.execute(request).await
    }
}
