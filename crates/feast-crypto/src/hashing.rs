//! Salted SHA-1 (`{SSHA}`) password hashing.
//!
//! Stored format: `"{SSHA}" + base64(sha1(password || salt) || salt)`.

use crate::{constants::*, errors::*};
use base64::prelude::*;
use rand::rngs::OsRng;
use rand::RngCore;
use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Hash a password into the `{SSHA}` stored format
///
/// A fresh salt of `salt_len` bytes is drawn from the OS random source on
/// every call, so hashing the same password twice gives different strings.
///
/// # Errors
///
/// * `InvalidInput` - `salt_len` is zero
/// * `RandomGenerationFailed` - the OS random source is unavailable
pub fn hash_password(password: &[u8], salt_len: usize) -> Result<String> {
    if salt_len == 0 {
        return Err(CryptoError::InvalidInput(
            "salt length must be greater than zero".to_string(),
        ));
    }

    let salt = generate_salt(salt_len)?;
    let digest = ssha_digest(password, &salt);

    let mut payload = Zeroizing::new(Vec::with_capacity(SSHA_DIGEST_SIZE + salt_len));
    payload.extend_from_slice(&digest);
    payload.extend_from_slice(&salt);

    Ok(format!("{}{}", SSHA_TAG, BASE64_STANDARD.encode(payload.as_slice())))
}

/// Verify a password against an `{SSHA}` stored hash
///
/// Any salt length is accepted as long as the decoded payload is longer than
/// the 20-byte digest, so hashes created with shorter legacy salts still
/// verify.
///
/// # Returns
///
/// `Ok(true)` on match, `Ok(false)` for a well-formed hash that does not match
///
/// # Errors
///
/// * `InvalidHashFormat` - missing tag, bad base64, or no salt after the digest
pub fn verify_password(password: &[u8], stored: &str) -> Result<bool> {
    let encoded = stored
        .strip_prefix(SSHA_TAG)
        .ok_or_else(|| CryptoError::InvalidHashFormat("missing {SSHA} tag".to_string()))?;

    let decoded = Zeroizing::new(
        BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| CryptoError::InvalidHashFormat(format!("invalid base64: {}", e)))?,
    );

    if decoded.len() <= SSHA_DIGEST_SIZE {
        return Err(CryptoError::InvalidHashFormat(format!(
            "decoded hash is {} bytes, expected more than {}",
            decoded.len(),
            SSHA_DIGEST_SIZE
        )));
    }

    let (stored_digest, salt) = decoded.split_at(SSHA_DIGEST_SIZE);
    let computed = ssha_digest(password, salt);

    Ok(constant_time_compare(&computed, stored_digest))
}

/// Generate `len` random salt bytes from the OS random source
pub fn generate_salt(len: usize) -> Result<Vec<u8>> {
    let mut salt = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| CryptoError::RandomGenerationFailed(e.to_string()))?;
    Ok(salt)
}

/// Securely compare two byte slices in constant time
///
/// Slices of different length compare unequal.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

fn ssha_digest(password: &[u8], salt: &[u8]) -> [u8; SSHA_DIGEST_SIZE] {
    let mut hasher = Sha1::new();
    hasher.update(password);
    hasher.update(salt);
    hasher.finalize().into()
}
