//! Core types and credential storage for the LabSched client SDK.
//!
//! This crate owns the session model (user profile, tagged tokens) and the
//! two-tier credential store that the HTTP client and service layers build
//! on. It performs no network IO.

pub mod error;
pub mod role;
pub mod session;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use role::Role;
pub use session::{AuthToken, SessionRecord, StoredToken, UserProfile, FALLBACK_TOKEN_PREFIX};
pub use store::{CredentialScope, CredentialStore, FileScope, MemoryScope, TokenSource};
