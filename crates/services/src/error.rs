//! Service-level errors.

use thiserror::Error;

use labsched_client::ClientError;

/// Errors surfaced by the service layer.
///
/// Read paths never return these: they log the failure and fall back to an
/// empty default. Mutating paths propagate them so callers can surface the
/// rejection.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A user-scoped mutation was attempted with no active session.
    #[error("user ID required: no active session")]
    UserIdRequired,

    /// The underlying request failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}
