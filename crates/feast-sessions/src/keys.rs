//! RSA key material for token signing.
//!
//! Keys are read once at startup and never change afterwards. Loading fails
//! fast: unreadable paths, malformed PEM, and a public key that does not belong
//! to the private key are all reported before the service accepts traffic.

use crate::{errors::*, types::*};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// The only algorithm tokens are signed or accepted with
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::RS256;

/// Private/public RSA key pair used by the token service
#[derive(Clone)]
pub struct SigningKeyPair {
    pub(crate) encoding_key: EncodingKey,
    pub(crate) decoding_key: DecodingKey,
}

impl SigningKeyPair {
    /// Build a key pair from PEM-encoded private and public keys
    ///
    /// # Errors
    ///
    /// * `KeyLoad` - either PEM is invalid, or the keys do not form a pair
    pub fn from_pem(private_pem: &[u8], public_pem: &[u8]) -> Result<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(private_pem).map_err(|e| {
            SessionError::KeyLoad {
                kind: "private",
                reason: e.to_string(),
            }
        })?;
        let decoding_key = decoding_key_from_pem(public_pem)?;

        let pair = Self {
            encoding_key,
            decoding_key,
        };
        pair.check_pair()?;

        Ok(pair)
    }

    /// Read both PEM files and build the key pair
    pub fn from_pem_files(
        private_path: impl AsRef<Path>,
        public_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let private_pem = read_key_file(private_path.as_ref())?;
        let public_pem = read_key_file(public_path.as_ref())?;

        let pair = Self::from_pem(&private_pem, &public_pem)?;
        debug!(
            private_key = ?private_path.as_ref(),
            public_key = ?public_path.as_ref(),
            "Loaded token signing keys"
        );

        Ok(pair)
    }

    /// Sign and verify a throwaway token so a mismatched or unusable pair is
    /// caught at load time instead of on the first login.
    fn check_pair(&self) -> Result<()> {
        let probe = TokenClaims {
            exp: current_timestamp() + 60,
            acct: "key-check".to_string(),
            name: String::new(),
        };

        let token = encode(&Header::new(TOKEN_ALGORITHM), &probe, &self.encoding_key).map_err(
            |e| SessionError::KeyLoad {
                kind: "private",
                reason: e.to_string(),
            },
        )?;

        decode::<TokenClaims>(&token, &self.decoding_key, &Validation::new(TOKEN_ALGORITHM))
            .map_err(|_| SessionError::KeyLoad {
                kind: "public",
                reason: "public key does not match private key".to_string(),
            })?;

        Ok(())
    }
}

impl fmt::Debug for SigningKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeyPair")
            .field("algorithm", &TOKEN_ALGORITHM)
            .finish_non_exhaustive()
    }
}

/// Parse a PEM-encoded RSA public key
pub(crate) fn decoding_key_from_pem(public_pem: &[u8]) -> Result<DecodingKey> {
    DecodingKey::from_rsa_pem(public_pem).map_err(|e| SessionError::KeyLoad {
        kind: "public",
        reason: e.to_string(),
    })
}

pub(crate) fn read_key_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| SessionError::KeyRead {
        path: path.to_path_buf(),
        source,
    })
}
