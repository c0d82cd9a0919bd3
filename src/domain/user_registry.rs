//! Append-only store of registered users.
//!
//! [`UserRegistry`] keeps users in registration order inside a single
//! [`tokio::sync::RwLock`]. The uniqueness check and the append happen under
//! one write guard, so two concurrent registrations of the same username
//! cannot both succeed.

use std::fmt;

use tokio::sync::RwLock;

use crate::error::ApiError;

/// A registered user.
///
/// The password is kept as given, without hashing.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Unique login name, compared byte for byte.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Process-lifetime list of users with unique usernames.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: RwLock<Vec<User>>,
}

impl UserRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `user` unless the username is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserAlreadyExists`] if a user with the same
    /// username is present.
    pub async fn insert_if_absent(&self, user: User) -> Result<(), ApiError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(ApiError::UserAlreadyExists(user.username));
        }
        users.push(user);
        Ok(())
    }

    /// Returns `true` if `username` is registered.
    pub async fn contains(&self, username: &str) -> bool {
        self.users.read().await.iter().any(|u| u.username == username)
    }

    /// Returns a copy of the user registered as `username`.
    #[cfg(test)]
    pub async fn find(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Returns every username in registration order.
    #[cfg(test)]
    pub async fn usernames(&self) -> Vec<String> {
        self.users
            .read()
            .await
            .iter()
            .map(|u| u.username.clone())
            .collect()
    }

    /// Returns the number of registered users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Returns `true` if no user is registered.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn insert_and_find() {
        let registry = UserRegistry::new();
        let result = registry.insert_if_absent(User::new("ann", "pw")).await;
        assert!(result.is_ok());

        let Some(user) = registry.find("ann").await else {
            panic!("user not stored");
        };
        assert_eq!(user.password, "pw");
        assert!(registry.contains("ann").await);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let registry = UserRegistry::new();
        let _ = registry.insert_if_absent(User::new("ann", "pw")).await;

        let result = registry.insert_if_absent(User::new("ann", "other")).await;
        assert!(matches!(result, Err(ApiError::UserAlreadyExists(ref name)) if name == "ann"));
        assert_eq!(registry.len().await, 1);

        let Some(user) = registry.find("ann").await else {
            panic!("user lost");
        };
        assert_eq!(user.password, "pw");
    }

    #[tokio::test]
    async fn usernames_are_case_sensitive() {
        let registry = UserRegistry::new();
        let _ = registry.insert_if_absent(User::new("ann", "pw")).await;
        let result = registry.insert_if_absent(User::new("Ann", "pw")).await;
        assert!(result.is_ok());
        assert_eq!(registry.usernames().await, vec!["ann", "Ann"]);
    }

    #[tokio::test]
    async fn concurrent_registrations_admit_exactly_one() {
        let registry = Arc::new(UserRegistry::new());
        let mut tasks = Vec::new();
        for i in 0..16 {
            let registry = Arc::clone(&registry);
            tasks.push(tokio::spawn(async move {
                registry
                    .insert_if_absent(User::new("racer", format!("pw{i}")))
                    .await
                    .is_ok()
            }));
        }

        let mut successes = 0;
        for task in tasks {
            let Ok(ok) = task.await else {
                panic!("task panicked");
            };
            if ok {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn empty_registry() {
        let registry = UserRegistry::new();
        assert!(registry.is_empty().await);
        assert!(registry.find("nobody").await.is_none());
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", User::new("ann", "secret"));
        assert!(rendered.contains("ann"));
        assert!(!rendered.contains("secret"));
    }
}
