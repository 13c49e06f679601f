//! System setting endpoints.

use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::SystemSettingUpdate;

impl ApiClient {
    /// Fetch one setting by key.
    pub async fn system_setting(&self, key: &str) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::GET, &format!("/system-settings/{key}"));
        self.execute(request).await
    }

    /// Overwrite one setting's value.
    pub async fn update_system_setting(
        &self,
        key: &str,
        update: &SystemSettingUpdate,
    ) -> Result<JsonValue, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/system-settings/{key}"))
            .json(update);
        self.execute(request).await
    }

    /// The semester currently selected for public display.
    pub async fn current_display_semester(&self) -> Result<JsonValue, ClientError> {
        let request = self.request(Method::GET, "/system-settings/display-semester/current");
        self.execute(request).await
    }
}
