//! # feast-sessions
//!
//! Stateless session tokens for gorilla-feast.
//!
//! Tokens are compact RS256 JWS strings carrying `{exp, acct, name}`. Nothing
//! is stored server-side: a token is valid while its signature checks out
//! against the configured public key and `exp` is in the future. There is no
//! refresh and no revocation.

pub mod errors;
pub mod keys;
mod service;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

pub use errors::*;
pub use keys::{SigningKeyPair, TOKEN_ALGORITHM};
pub use service::{SessionService, TokenIssuer, TokenVerifier};
pub use traits::*;
pub use types::*;
