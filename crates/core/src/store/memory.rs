//! Process-lifetime credential scope.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::CredentialScope;

/// In-memory scope. Lives exactly as long as the process, so it plays the
/// role of tab-scoped storage: credentials held here never outlive a
/// restart.
#[derive(Debug, Default)]
pub struct MemoryScope {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryScope {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialScope for MemoryScope {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let scope = MemoryScope::new();
        assert_eq!(scope.get("token"), None);

        scope.set("token", "abc");
        assert_eq!(scope.get("token"), Some("abc".to_string()));

        scope.set("token", "def");
        assert_eq!(scope.get("token"), Some("def".to_string()));

        scope.remove("token");
        assert_eq!(scope.get("token"), None);

        // Removing a missing key is fine.
        scope.remove("token");
    }
}
