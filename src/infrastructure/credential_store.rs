//! In-memory credential store
//!
//! Passwords are kept and compared as plain text. Nothing is persisted, so
//! every registered user is lost when the process exits.

use std::collections::HashMap;

/// Username to password mapping with unique usernames
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        CredentialStore::default()
    }

    /// Register a new user.
    /// Returns false without touching the store if the username is taken.
    pub fn register(&mut self, username: &str, password: &str) -> bool {
        if self.users.contains_key(username) {
            return false;
        }
        self.users.insert(username.to_string(), password.to_string());
        true
    }

    /// Check a username/password pair (exact, case-sensitive match).
    /// Unknown users and wrong passwords both yield false.
    pub fn login(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| stored == password)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
