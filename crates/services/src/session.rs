//! Session lifecycle management.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use labsched_client::types::{LoginRequest, LoginResponse};
use labsched_client::{ApiClient, ClientError};
use labsched_core::{CredentialStore, SessionRecord, UserProfile};

use crate::events::{AccountChange, ForcedLogoutNotice, NullEvents, SessionEvents};

/// Orchestrates login, logout and the forced-logout check over one
/// credential store and one API client.
///
/// Construct it once and share it: the store is the only session state,
/// so every service holding the same store sees the same session.
pub struct SessionManager {
    client: ApiClient,
    store: Arc<CredentialStore>,
    events: Arc<dyn SessionEvents>,
}

impl SessionManager {
    /// Manager without lifecycle hooks.
    pub fn new(client: ApiClient, store: Arc<CredentialStore>) -> Self {
        Self::with_events(client, store, Arc::new(NullEvents))
    }

    /// Manager that notifies `events` on forced logouts and teardowns.
    pub fn with_events(
        client: ApiClient,
        store: Arc<CredentialStore>,
        events: Arc<dyn SessionEvents>,
    ) -> Self {
        Self {
            client,
            store,
            events,
        }
    }

    /// Authenticate and commit the session to both storage scopes.
    ///
    /// The store is only touched on success; failures propagate untouched
    /// so the caller owns the user-facing messaging.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let response = self.client.login(credentials).await?;

        let profile = UserProfile {
            id: response.user_id.clone(),
            full_name: response.full_name.clone(),
            email: response.email.clone(),
            role: response.role,
            is_approved: response.is_approved,
            requires_approval: response.requires_approval,
            is_active: response.is_active,
            last_auth_check: Utc::now(),
        };
        self.store
            .save(&SessionRecord::new(response.access_token.clone(), profile));

        info!("user {} logged in as {}", response.user_id, response.role);
        Ok(response)
    }

    /// Tear down the session. Safe to call when already logged out.
    pub fn logout(&self) {
        self.store.clear();
        self.events.logged_out();
    }

    /// Flag another user's sessions for forced logout. Administrative.
    pub async fn force_logout(&self, user_id: &str) -> Result<JsonValue, ClientError> {
        self.client.force_logout(user_id).await
    }

    /// Ask the backend whether an administrator changed this account, and
    /// tear the session down if so. Returns `true` when a logout happened.
    ///
    /// Failures never log the user out: with no session the check does not
    /// even hit the network, and a failed request leaves the store alone.
    pub async fn check_forced_logout(&self) -> bool {
        let Some(record) = self.store.read() else {
            debug!("forced-logout check skipped, no active session");
            return false;
        };
        let user = record.user;

        let check = match self
            .client
            .check_forced_logout(&user.id, Some(user.last_auth_check))
            .await
        {
            Ok(check) => check,
            Err(err) => {
                warn!("forced-logout check for {} failed: {err}", user.id);
                return false;
            }
        };

        // The check timestamp advances on every answered poll, logout or
        // not, so one server-side change is only ever reported once.
        self.store.touch_last_check(Utc::now());

        if !check.should_logout {
            return false;
        }

        let change = match &check.user_info {
            Some(info) if info.role != user.role => AccountChange::RoleChanged {
                from: user.role,
                to: info.role,
            },
            Some(info) if !info.is_active => AccountChange::Deactivated,
            _ => AccountChange::SettingsModified,
        };
        let notice = ForcedLogoutNotice::new(change, check.timestamp);

        warn!(
            "forced logout for {}: {}",
            user.id,
            notice.change.description()
        );
        self.events.forced_logout(&notice);
        self.logout();
        true
    }

    /// Profile snapshot of the current session, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.store.read().map(|record| record.user)
    }

    /// Whether a complete session record is stored.
    pub fn is_authenticated(&self) -> bool {
        self.store.read().is_some()
    }
}
