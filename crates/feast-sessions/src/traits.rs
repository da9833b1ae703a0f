use crate::{Result, SessionToken, TokenClaims};

/// Session manager trait for token operations
pub trait SessionManager: Send + Sync {
    /// Issue a signed token for an account that just authenticated
    fn issue_token(&self, acct: &str, display_name: &str) -> Result<SessionToken>;

    /// Verify signature and expiry, returning the embedded claims
    fn verify_token(&self, token: &str) -> Result<TokenClaims>;
}
