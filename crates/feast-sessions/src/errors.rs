use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read key file {path:?}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {kind} key: {reason}")]
    KeyLoad { kind: &'static str, reason: String },

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Invalid algorithm: found {found}, expected RS256")]
    InvalidAlgorithm { found: String },
}

impl SessionError {
    /// True for failures caused by bad key material rather than a bad token
    pub fn is_key_error(&self) -> bool {
        matches!(self, SessionError::KeyRead { .. } | SessionError::KeyLoad { .. })
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
