//! Account administration helpers.

use std::sync::Arc;

use tracing::warn;

use labsched_client::ApiClient;
use labsched_core::CredentialStore;

/// Approval-queue helpers for administrator views.
///
/// Like the notification reads, counts degrade to zero on any failure so
/// badges render empty instead of erroring.
pub struct AccountService {
    client: ApiClient,
    store: Arc<CredentialStore>,
}

impl AccountService {
    pub fn new(client: ApiClient, store: Arc<CredentialStore>) -> Self {
        Self { client, store }
    }

    /// Number of accounts waiting for approval. Zero when logged out or on
    /// any failure.
    pub async fn pending_accounts_count(&self) -> u64 {
        if self.store.read().is_none() {
            warn!("pending-accounts count skipped, no active session");
            return 0;
        }

        match self.client.pending_approval_users().await {
            Ok(list) => list.users.len() as u64,
            Err(err) => {
                warn!("fetching pending accounts failed: {err}");
                0
            }
        }
    }
}
