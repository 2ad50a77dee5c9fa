use serde::{Deserialize, Serialize};

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address; unique across the store.
    pub email: String,
    /// Password exactly as submitted. No hashing is applied.
    pub password: String,
    /// Creation timestamp in RFC3339 format.
    pub created_at: String,
}
