//! Session token service implementation.

mod tokens;

use crate::{errors::*, keys::SigningKeyPair, traits::*, types::*};
use feast_crypto::SESSION_TOKEN_EXPIRY_SECONDS;

pub use tokens::{TokenIssuer, TokenVerifier};

/// Session token service: issues with the private key, verifies with the
/// public key. Immutable after construction and safe to share across tasks.
#[derive(Clone)]
pub struct SessionService {
    pub(crate) issuer: TokenIssuer,
    pub(crate) verifier: TokenVerifier,
}

impl SessionService {
    /// Create a new session service with the default one hour token lifetime
    pub fn new(keys: SigningKeyPair) -> Self {
        Self::with_ttl(keys, SESSION_TOKEN_EXPIRY_SECONDS)
    }

    /// Create a new session service with a custom token lifetime (seconds)
    pub fn with_ttl(keys: SigningKeyPair, token_ttl: u64) -> Self {
        let SigningKeyPair {
            encoding_key,
            decoding_key,
        } = keys;

        Self {
            issuer: TokenIssuer::new(encoding_key, token_ttl),
            verifier: TokenVerifier::new(decoding_key),
        }
    }

    /// Verifier half, for components that only need to check tokens
    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }
}

impl SessionManager for SessionService {
    fn issue_token(&self, acct: &str, display_name: &str) -> Result<SessionToken> {
        self.issuer.issue(acct, display_name)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims> {
        self.verifier.verify(token)
    }
}
