use serde::{Deserialize, Serialize};

/// JWT token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub exp: u64,     // Expiration (unix seconds)
    pub acct: String, // Account ID
    pub name: String, // Display name
}

/// Signed session token returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
}

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.token
    }
}

// Re-export current_timestamp from feast-crypto
pub use feast_crypto::current_timestamp;
