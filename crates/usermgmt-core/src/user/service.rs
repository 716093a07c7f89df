//! User storage contract.
//!
//! Defines the interface a storage backend must expose to the controller.

use super::model::User;
use anyhow::Result;

/// An abstract storage contract for user records.
///
/// This trait decouples the controller from the specific storage mechanism
/// (in-memory map, database, remote API). No implementation ships with this
/// crate; backends and test doubles supply one.
///
/// # Implementation Notes
///
/// Every call is a single synchronous attempt: the controller performs no
/// retries and adds no synchronization, so implementations must be
/// thread-safe themselves if they are shared across threads. "Not found" is
/// `Ok(None)`, never an error; anything returned as `Err` propagates
/// unchanged to the controller's caller.
pub trait UserService: Send + Sync {
    /// Finds a user by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: user found
    /// - `Ok(None)`: no such user
    /// - `Err(_)`: backend failure
    fn get_user(&self, id: u64) -> Result<Option<User>>;

    /// Finds a user by email address.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: user found
    /// - `Ok(None)`: no user with that email
    /// - `Err(_)`: backend failure
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Persists a create-or-update.
    ///
    /// `Ok(false)` is a backend-determined persistence failure (e.g. a
    /// constraint violation) with no defined side effect beyond "not
    /// persisted". What exactly failed is opaque at this level.
    fn save_user(&self, user: &User) -> Result<bool>;

    /// Removes a user by identifier.
    ///
    /// Part of the contract for backends; the controller never calls it.
    fn delete_user(&self, id: u64) -> Result<bool>;

    /// Lists all users whose active flag is set.
    ///
    /// Order is backend-defined and the controller preserves it.
    fn get_active_users(&self) -> Result<Vec<User>>;

    /// Backend-defined business validation.
    ///
    /// `Ok(true)` means the record is acceptable for persistence.
    fn validate_user(&self, user: &User) -> Result<bool>;
}
