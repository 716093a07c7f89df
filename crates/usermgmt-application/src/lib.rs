//! Application layer for user management.
//!
//! Exposes [`UserController`], the orchestration surface callers use to
//! create, fetch, update, deactivate and list users through a pluggable
//! [`usermgmt_core::UserService`] backend.

pub mod user_controller;

pub use user_controller::UserController;
