//! User controller implementation.
//!
//! This module provides the `UserController`, a thin orchestration layer
//! that validates inputs, delegates to the [`UserService`] storage contract,
//! and adapts results for callers. It keeps no state beyond the collaborator
//! handle and never retains users between calls.

use anyhow::Result;
use std::sync::Arc;
use usermgmt_core::{User, UserService};

/// Fallback returned by [`UserController::display_name`] when no user
/// matches the requested id.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Thin orchestration layer between callers and a [`UserService`] backend.
///
/// Guard failures (blank inputs, missing records, backend-rejected
/// validation) surface as `Ok(false)` / `Ok(None)`; errors raised inside the
/// collaborator propagate to the caller unchanged. There is no retry, no
/// timeout, and no partial-failure handling: each collaborator call is a
/// single synchronous attempt whose outcome is the answer.
pub struct UserController {
    /// Storage backend for user records
    user_service: Arc<dyn UserService>,
}

impl UserController {
    /// Creates a controller over the given storage backend.
    ///
    /// # Arguments
    ///
    /// * `user_service` - Storage backend for user records
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Returns the user's name, or `"Unknown User"` when the id is unknown.
    pub fn display_name(&self, user_id: u64) -> Result<String> {
        let user = self.user_service.get_user(user_id)?;
        Ok(user.map_or_else(|| UNKNOWN_USER.to_string(), |u| u.name))
    }

    /// Creates a new active user from the given name and email.
    ///
    /// Returns `Ok(false)` without touching the backend when either field is
    /// blank, and without saving when the backend rejects the record during
    /// validation. Otherwise the result is `save_user`'s verdict, untouched.
    pub fn create_user(&self, name: &str, email: &str) -> Result<bool> {
        if name.trim().is_empty() || email.trim().is_empty() {
            tracing::debug!("create_user rejected: blank name or email");
            return Ok(false);
        }

        let user = User::new(name, email);
        if !self.user_service.validate_user(&user)? {
            tracing::debug!("create_user rejected by backend validation: {}", name);
            return Ok(false);
        }

        self.user_service.save_user(&user)
    }

    /// Persists caller-supplied changes to an existing user.
    ///
    /// The record passes through unchanged (no timestamp or active-flag
    /// mutation); only a blank name is rejected locally.
    pub fn update_user(&self, user: &User) -> Result<bool> {
        if user.name.trim().is_empty() {
            tracing::debug!("update_user rejected: blank name (id {})", user.id);
            return Ok(false);
        }

        if !self.user_service.validate_user(user)? {
            return Ok(false);
        }

        self.user_service.save_user(user)
    }

    /// Flips a user's active flag off and persists the change.
    ///
    /// Returns `Ok(false)` when no user matches the id, with no save
    /// attempted. Nothing on the record other than the active flag changes.
    pub fn deactivate_user(&self, user_id: u64) -> Result<bool> {
        let Some(mut user) = self.user_service.get_user(user_id)? else {
            tracing::warn!("deactivate_user: no user with id {}", user_id);
            return Ok(false);
        };

        user.is_active = false;
        self.user_service.save_user(&user)
    }

    /// Names of all active users, in the backend's order.
    ///
    /// The backend is queried once per invocation and never cached; the
    /// projection to names is lazy.
    pub fn active_user_names(&self) -> Result<impl Iterator<Item = String>> {
        let users = self.user_service.get_active_users()?;
        Ok(users.into_iter().map(|u| u.name))
    }

    /// Looks up a user by email address.
    ///
    /// Blank input short-circuits to `Ok(None)` without a backend call;
    /// otherwise the backend's answer passes through unchanged.
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        if email.trim().is_empty() {
            return Ok(None);
        }

        self.user_service.get_user_by_email(email)
    }
}
