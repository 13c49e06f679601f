//! HTTP client for the LabSched scheduling backend.
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] with base URL handling and
//! token attachment: every request reads the current credentials from an
//! injected [`labsched_core::TokenSource`] at dispatch time, so logins and
//! logouts take effect without rebuilding the client. Endpoint wrappers for
//! each backend resource live in their own modules as `impl ApiClient`
//! blocks.

pub mod auth;
pub mod client;
pub mod config;
pub mod course_offerings;
pub mod error;
pub mod instructors;
pub mod lab_rooms;
pub mod notifications;
pub mod schedules;
pub mod semesters;
pub mod system_settings;
pub mod types;
pub mod users;

pub use client::{ApiClient, ApiClientBuilder, X_USER_DATA, X_USER_ID};
pub use config::ClientConfig;
pub use error::ClientError;
