//! User domain model.
//!
//! Represents a single account record: identifier, contact details,
//! creation timestamp and active flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flat account record.
///
/// There is no relationship or graph structure around users; this is the
/// only entity in the domain. Identifiers are assigned by the storage
/// backend, so a freshly constructed user carries id 0 until it has been
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the storage backend.
    pub id: u64,
    /// Display name. Must be non-blank for create and update acceptance.
    pub name: String,
    /// Contact email. Must be non-blank for create acceptance.
    pub email: String,
    /// Creation timestamp, stamped by the controller at create time.
    pub created_at: DateTime<Utc>,
    /// Active flag. New users start active; deactivation flips this off
    /// and changes nothing else.
    pub is_active: bool,
}

impl User {
    /// Creates a new active user stamped with the current UTC time.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
            is_active: true,
        }
    }
}
