//! Key fixtures shared by the session tests.

use crate::*;

pub const SIGNING_PRIVATE: &[u8] = include_bytes!("../../tests/fixtures/signing_private.pem");
pub const SIGNING_PUBLIC: &[u8] = include_bytes!("../../tests/fixtures/signing_public.pem");
pub const OTHER_PRIVATE: &[u8] = include_bytes!("../../tests/fixtures/other_private.pem");
pub const OTHER_PUBLIC: &[u8] = include_bytes!("../../tests/fixtures/other_public.pem");

/// Helper to create the key pair used by most tests
pub fn signing_keys() -> SigningKeyPair {
    SigningKeyPair::from_pem(SIGNING_PRIVATE, SIGNING_PUBLIC).unwrap()
}

/// Helper to create a session service over the signing key pair
pub fn create_test_session_service() -> SessionService {
    SessionService::new(signing_keys())
}
