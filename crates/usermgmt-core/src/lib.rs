pub mod error;
pub mod user;

// Re-export common types
pub use error::UserStoreError;
pub use user::{User, UserService};
