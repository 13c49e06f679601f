//! User-facing services over the LabSched API client.
//!
//! [`SessionManager`] owns the login/logout lifecycle and the forced-logout
//! poll, [`NotificationService`] and [`AccountService`] wrap their resource
//! endpoints with the session's identity filled in. Everything is injected:
//! construct the credential store and client once, share them via `Arc`,
//! and hand them to whichever services the caller needs.

pub mod accounts;
pub mod error;
pub mod events;
pub mod notifications;
pub mod poll;
pub mod session;

pub use accounts::AccountService;
pub use error::ServiceError;
pub use events::{AccountChange, ForcedLogoutNotice, NullEvents, SessionEvents};
pub use notifications::NotificationService;
pub use poll::poll_forced_logout;
pub use session::SessionManager;
