//! Token issuance and verification.

use crate::{errors::*, keys, types::*};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::path::Path;

use keys::TOKEN_ALGORITHM;

/// Signs session tokens with the RSA private key
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: u64,
}

impl TokenIssuer {
    pub(crate) fn new(encoding_key: EncodingKey, ttl: u64) -> Self {
        Self { encoding_key, ttl }
    }

    /// Issue a token for `acct` expiring `ttl` seconds from now
    pub fn issue(&self, acct: &str, display_name: &str) -> Result<SessionToken> {
        let claims = TokenClaims {
            exp: current_timestamp() + self.ttl,
            acct: acct.to_string(),
            name: display_name.to_string(),
        };

        let token = self.sign_claims(&claims)?;
        tracing::debug!(acct = %acct, exp = claims.exp, "Issued session token");

        Ok(SessionToken { token })
    }

    /// Sign an arbitrary claim set
    pub fn sign_claims(&self, claims: &TokenClaims) -> Result<String> {
        encode(&Header::new(TOKEN_ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| SessionError::Signing(e.to_string()))
    }
}

/// Checks session tokens against the RSA public key
///
/// Only the public key is needed, so a verifier can run anywhere the
/// private key must not be present.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub(crate) fn new(decoding_key: DecodingKey) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Build a verify-only instance from a PEM-encoded public key
    pub fn from_public_pem(public_pem: &[u8]) -> Result<Self> {
        Ok(Self::new(keys::decoding_key_from_pem(public_pem)?))
    }

    /// Read a PEM public key file and build a verify-only instance
    pub fn from_public_pem_file(path: impl AsRef<Path>) -> Result<Self> {
        let pem = keys::read_key_file(path.as_ref())?;
        Self::from_public_pem(&pem)
    }

    /// Verify a token
    pub fn verify(&self, token: &str) -> Result<TokenClaims> {
        // Step 1: Parse header WITHOUT verification
        let header = jsonwebtoken::decode_header(token)
            .map_err(|e| SessionError::MalformedToken(e.to_string()))?;

        // Step 2: STRICT algorithm check
        if header.alg != TOKEN_ALGORITHM {
            return Err(SessionError::InvalidAlgorithm {
                found: format!("{:?}", header.alg),
            });
        }

        // Step 3: Verify signature, then expiry
        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(map_jwt_error)?;

        Ok(token_data.claims)
    }
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> SessionError {
    match error.kind() {
        ErrorKind::InvalidSignature => SessionError::InvalidSignature,
        ErrorKind::ExpiredSignature => SessionError::TokenExpired,
        ErrorKind::InvalidAlgorithm => SessionError::InvalidAlgorithm {
            found: "mismatched".to_string(),
        },
        _ => SessionError::MalformedToken(error.to_string()),
    }
}
