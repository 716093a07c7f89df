//! User domain module.
//!
//! This module contains the user account record and the storage contract
//! a backend must implement.
//!
//! # Module Structure
//!
//! - `model`: the `User` account record
//! - `service`: the `UserService` storage contract

mod model;
mod service;

// Re-export public API
pub use model::User;
pub use service::UserService;
