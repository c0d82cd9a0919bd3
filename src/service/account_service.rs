//! User registration.

use std::sync::Arc;

use crate::domain::{User, UserRegistry};
use crate::error::ApiError;

/// Validates registration input and appends new users to the registry.
#[derive(Debug, Clone)]
pub struct AccountService {
    registry: Arc<UserRegistry>,
}

impl AccountService {
    /// Creates a service backed by `registry`.
    #[must_use]
    pub fn new(registry: Arc<UserRegistry>) -> Self {
        Self { registry }
    }

    /// Returns a reference to the inner [`UserRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<UserRegistry> {
        &self.registry
    }

    /// Registers a new user.
    ///
    /// Both fields must be present and non-empty. The password is stored
    /// as given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCredentials`] if either field is absent or
    /// empty, and [`ApiError::UserAlreadyExists`] if the username is taken.
    pub async fn register(
        &self,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<(), ApiError> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(ApiError::MissingCredentials);
        };
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::MissingCredentials);
        }

        self.registry
            .insert_if_absent(User::new(username.clone(), password))
            .await?;

        tracing::info!(%username, "user registered");
        Ok(())
    }
}
