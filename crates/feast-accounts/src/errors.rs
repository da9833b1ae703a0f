//! Account service error types.

use feast_crypto::CryptoError;
use feast_sessions::SessionError;
use feast_storage::StorageError;
use thiserror::Error;

/// Account service errors
#[derive(Debug, Error)]
pub enum AccountError {
    /// No account with this id
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Password did not match, or the stored hash could not be checked
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signup for an id that is taken
    #[error("Account already exists: {0}")]
    AlreadyExists(String),

    /// Input rejected before touching storage
    #[error("{0}")]
    Validation(String),

    /// Requester tried to delete their own account
    #[error("User cannot delete their own account")]
    SelfDeletion,

    /// Storage operation failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Crypto(#[from] CryptoError),

    /// Token issuance failed
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl AccountError {
    /// Message shown to a client whose login failed, whatever the cause
    pub const LOGIN_FAILED_MESSAGE: &'static str = "Incorrect account or password";

    /// True for the login outcomes that must look identical to a client
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            AccountError::AccountNotFound(_) | AccountError::InvalidCredentials
        )
    }
}

/// Result type alias for account operations
pub type Result<T> = std::result::Result<T, AccountError>;
