//! Fixed parameters of the stored credential format and session tokens.

/// Tag prefixed to every stored hash ("salted SHA-1, version 1")
pub const SSHA_TAG: &str = "{SSHA}";

/// Length of the SHA-1 digest at the front of a decoded stored hash
pub const SSHA_DIGEST_SIZE: usize = 20;

/// Salt length used for all newly created hashes
pub const DEFAULT_SALT_SIZE: usize = 32;

/// Minimum accepted password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Session token lifetime in seconds (1 hour)
pub const SESSION_TOKEN_EXPIRY_SECONDS: u64 = 3600;
