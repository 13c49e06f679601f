//! Two-tier credential storage.
//!
//! Sessions are written redundantly to two key/value scopes with different
//! lifetimes: a session scope that lives as long as the process and a
//! persistent scope that survives restarts. Reads always prefer the session
//! scope and fall back to the persistent one.
//!
//! The dual write is not atomic and nothing reconciles scopes that diverge.
//! A scope holding only half a record, or an unparsable one, reads as
//! absent.

mod file;
mod memory;

pub use file::FileScope;
pub use memory::MemoryScope;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::session::{AuthToken, SessionRecord, StoredToken, UserProfile};

/// Storage key for the serialized token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user profile.
pub const USER_KEY: &str = "user";

/// A plain string key/value surface with no atomicity guarantees.
///
/// Implementations swallow their own IO failures: a failed read is `None`
/// and a failed write leaves the previous value in place.
pub trait CredentialScope: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: CredentialScope + ?Sized> CredentialScope for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Source of request credentials for the HTTP client.
pub trait TokenSource: Send + Sync {
    /// Credentials to attach to the next request, if a session exists.
    fn auth_token(&self) -> Option<AuthToken>;
}

/// Credential store spanning a session scope and a persistent scope.
///
/// [`CredentialStore::save`] writes the whole record to both scopes,
/// [`CredentialStore::read`] returns the first scope that holds a complete,
/// parsable record, and [`CredentialStore::clear`] wipes both.
pub struct CredentialStore {
    session: Box<dyn CredentialScope>,
    persistent: Box<dyn CredentialScope>,
}

impl CredentialStore {
    pub fn new<S, P>(session: S, persistent: P) -> Self
    where
        S: CredentialScope + 'static,
        P: CredentialScope + 'static,
    {
        Self {
            session: Box::new(session),
            persistent: Box::new(persistent),
        }
    }

    /// In-memory session scope over the default on-disk persistent scope.
    pub fn with_default_scopes() -> Self {
        Self::new(MemoryScope::new(), FileScope::new(FileScope::default_path()))
    }

    /// Persist a session to both scopes.
    pub fn save(&self, record: &SessionRecord) {
        let token_json = match serde_json::to_string(&record.token) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to serialize token, session not saved: {err}");
                return;
            }
        };
        let user_json = match serde_json::to_string(&record.user) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to serialize user profile, session not saved: {err}");
                return;
            }
        };

        for scope in [self.session.as_ref(), self.persistent.as_ref()] {
            scope.set(TOKEN_KEY, &token_json);
            scope.set(USER_KEY, &user_json);
        }
    }

    /// The current session, session scope first.
    pub fn read(&self) -> Option<SessionRecord> {
        if let Some(record) = Self::read_scope(self.session.as_ref()) {
            return Some(record);
        }
        Self::read_scope(self.persistent.as_ref())
    }

    /// Remove the session from both scopes. Safe when nothing is stored.
    pub fn clear(&self) {
        for scope in [self.session.as_ref(), self.persistent.as_ref()] {
            scope.remove(TOKEN_KEY);
            scope.remove(USER_KEY);
        }
    }

    /// Rewrite `last_auth_check` on whichever scopes currently hold a
    /// parsable profile. Other profile fields are left untouched; scopes
    /// without one are skipped.
    pub fn touch_last_check(&self, at: DateTime<Utc>) {
        for scope in [self.session.as_ref(), self.persistent.as_ref()] {
            let Some(user_json) = scope.get(USER_KEY) else {
                continue;
            };
            let Ok(mut user) = serde_json::from_str::<UserProfile>(&user_json) else {
                debug!("skipping last-check update on scope with unparsable profile");
                continue;
            };
            user.last_auth_check = at;
            match serde_json::to_string(&user) {
                Ok(json) => scope.set(USER_KEY, &json),
                Err(err) => warn!("failed to reserialize profile for last-check update: {err}"),
            }
        }
    }

    fn read_scope(scope: &dyn CredentialScope) -> Option<SessionRecord> {
        let token_json = scope.get(TOKEN_KEY)?;
        let user_json = scope.get(USER_KEY)?;

        let token = match serde_json::from_str::<StoredToken>(&token_json) {
            Ok(token) => token,
            Err(err) => {
                debug!("stored token unparsable, treating scope as empty: {err}");
                return None;
            }
        };
        let user = match serde_json::from_str::<UserProfile>(&user_json) {
            Ok(user) => user,
            Err(err) => {
                debug!("stored profile unparsable, treating scope as empty: {err}");
                return None;
            }
        };
        Some(SessionRecord { token, user })
    }
}

impl TokenSource for CredentialStore {
    fn auth_token(&self) -> Option<AuthToken> {
        self.read().map(|record| record.auth_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::sync::Arc;

    mock! {
        pub Scope {}

        impl CredentialScope for Scope {
            fn get(&self, key: &str) -> Option<String>;
            fn set(&self, key: &str, value: &str);
            fn remove(&self, key: &str);
        }
    }

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: "2021-00001".to_string(),
            full_name: "Alice Reyes".to_string(),
            email: "alice@example.edu".to_string(),
            role,
            is_approved: true,
            requires_approval: false,
            is_active: true,
            last_auth_check: Utc::now(),
        }
    }

    fn record(token: &str) -> SessionRecord {
        SessionRecord::new(token, profile(Role::FacultyStaff))
    }

    fn memory_store() -> (CredentialStore, Arc<MemoryScope>, Arc<MemoryScope>) {
        let session = Arc::new(MemoryScope::new());
        let persistent = Arc::new(MemoryScope::new());
        let store = CredentialStore::new(Arc::clone(&session), Arc::clone(&persistent));
        (store, session, persistent)
    }

    #[test]
    fn save_writes_both_scopes() {
        let (store, session, persistent) = memory_store();
        store.save(&record("jwt-abc"));

        for scope in [&session, &persistent] {
            assert!(scope.get(TOKEN_KEY).is_some());
            assert!(scope.get(USER_KEY).is_some());
        }
    }

    #[test]
    fn read_round_trips_the_record() {
        let (store, _, _) = memory_store();
        let saved = record("jwt-abc");
        store.save(&saved);

        let loaded = store.read().unwrap();
        assert_eq!(loaded.token.secret(), "jwt-abc");
        assert_eq!(loaded.user.id, "2021-00001");
        assert_eq!(loaded.user.role, Role::FacultyStaff);
    }

    #[test]
    fn read_prefers_the_session_scope() {
        let (store, session, persistent) = memory_store();

        let session_record = record("session-token");
        let persistent_record = record("persistent-token");
        session.set(TOKEN_KEY, &serde_json::to_string(&session_record.token).unwrap());
        session.set(USER_KEY, &serde_json::to_string(&session_record.user).unwrap());
        persistent.set(TOKEN_KEY, &serde_json::to_string(&persistent_record.token).unwrap());
        persistent.set(USER_KEY, &serde_json::to_string(&persistent_record.user).unwrap());

        assert_eq!(store.read().unwrap().token.secret(), "session-token");
    }

    #[test]
    fn read_falls_back_to_the_persistent_scope() {
        let (store, session, _) = memory_store();
        store.save(&record("surviving-token"));

        // Simulate a fresh process: the session scope is gone.
        session.remove(TOKEN_KEY);
        session.remove(USER_KEY);

        assert_eq!(store.read().unwrap().token.secret(), "surviving-token");
    }

    #[test]
    fn half_a_record_reads_as_absent() {
        let (store, session, _) = memory_store();
        let saved = record("jwt-abc");
        session.set(TOKEN_KEY, &serde_json::to_string(&saved.token).unwrap());

        assert!(store.read().is_none());
    }

    #[test]
    fn unparsable_session_record_falls_back() {
        let (store, session, persistent) = memory_store();
        let saved = record("good-token");
        persistent.set(TOKEN_KEY, &serde_json::to_string(&saved.token).unwrap());
        persistent.set(USER_KEY, &serde_json::to_string(&saved.user).unwrap());

        session.set(TOKEN_KEY, "not json");
        session.set(USER_KEY, "also not json");

        assert_eq!(store.read().unwrap().token.secret(), "good-token");
    }

    #[test]
    fn clear_removes_everything() {
        let (store, session, persistent) = memory_store();
        store.save(&record("jwt-abc"));
        store.clear();

        assert!(store.read().is_none());
        assert!(session.get(TOKEN_KEY).is_none());
        assert!(persistent.get(USER_KEY).is_none());

        // Clearing an empty store is a no-op.
        store.clear();
    }

    #[test]
    fn touch_updates_only_populated_scopes() {
        let (store, session, persistent) = memory_store();
        let saved = record("jwt-abc");
        persistent.set(TOKEN_KEY, &serde_json::to_string(&saved.token).unwrap());
        persistent.set(USER_KEY, &serde_json::to_string(&saved.user).unwrap());

        let later = Utc::now() + chrono::Duration::minutes(5);
        store.touch_last_check(later);

        assert!(session.get(USER_KEY).is_none());
        let updated: UserProfile =
            serde_json::from_str(&persistent.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(updated.last_auth_check, later);
        assert_eq!(updated.full_name, saved.user.full_name);
    }

    #[test]
    fn token_source_resolves_fallback_identity() {
        let (store, _, _) = memory_store();
        store.save(&record("user_fallback_token_2021-00001"));

        match store.auth_token().unwrap() {
            AuthToken::FallbackWithIdentity { identity, .. } => {
                let user: UserProfile = serde_json::from_str(&identity).unwrap();
                assert_eq!(user.id, "2021-00001");
            }
            other => panic!("expected fallback credentials, got {other:?}"),
        }
    }

    #[test]
    fn token_source_is_none_when_logged_out() {
        let (store, _, _) = memory_store();
        assert!(store.auth_token().is_none());
    }

    #[test]
    fn save_writes_token_and_user_keys_to_each_scope() {
        let mut session = MockScope::new();
        let mut persistent = MockScope::new();
        for scope in [&mut session, &mut persistent] {
            scope
                .expect_set()
                .with(eq(TOKEN_KEY), mockall::predicate::always())
                .times(1)
                .return_const(());
            scope
                .expect_set()
                .with(eq(USER_KEY), mockall::predicate::always())
                .times(1)
                .return_const(());
        }

        let store = CredentialStore::new(session, persistent);
        store.save(&record("jwt-abc"));
    }
}
