use serde::{Deserialize, Serialize};

/// A registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned immutable identifier; empty until first insert
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Unique across users (exact match)
    pub email: String,

    /// Stored as supplied; credential hashing/token issuance is the auth
    /// layer's concern, not this crate's
    pub password: String,
}
