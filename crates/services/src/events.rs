//! Session lifecycle hooks.

use chrono::{DateTime, Utc};

use labsched_core::Role;

/// What an administrator changed on the account. Variants are listed in
/// detection precedence: a role change wins over deactivation, which wins
/// over the generic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountChange {
    RoleChanged { from: Role, to: Role },
    Deactivated,
    SettingsModified,
}

impl AccountChange {
    /// Human-readable sentence describing the change.
    pub fn description(&self) -> String {
        match self {
            Self::RoleChanged { from, to } => {
                format!("Your role has been changed from \"{from}\" to \"{to}\".")
            }
            Self::Deactivated => "Your account has been deactivated.".to_string(),
            Self::SettingsModified => "Your account settings have been modified.".to_string(),
        }
    }
}

/// Message handed to [`SessionEvents::forced_logout`] when the server
/// forces this session out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedLogoutNotice {
    pub title: String,
    pub message: String,
    pub change: AccountChange,
    /// Server-side time of the forcing change, when reported.
    pub detected_at: Option<DateTime<Utc>>,
}

impl ForcedLogoutNotice {
    pub(crate) fn new(change: AccountChange, detected_at: Option<DateTime<Utc>>) -> Self {
        let message = format!(
            "Your account has been modified by an administrator.\n\n{}\n\nYou will be logged out now. Please log in again to continue with your updated access level.",
            change.description()
        );
        Self {
            title: "Account Modified by Administrator".to_string(),
            message,
            change,
            detected_at,
        }
    }
}

/// Hooks for session side effects the SDK cannot perform itself.
///
/// [`SessionEvents::forced_logout`] runs synchronously before the session
/// is torn down, so implementations can present the notice while the
/// credentials still exist. [`SessionEvents::logged_out`] fires after every
/// teardown and is where a UI returns to its login view.
pub trait SessionEvents: Send + Sync {
    fn forced_logout(&self, _notice: &ForcedLogoutNotice) {}
    fn logged_out(&self) {}
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEvents;

impl SessionEvents for NullEvents {}
