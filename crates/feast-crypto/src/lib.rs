//! # feast-crypto
//!
//! Password hashing primitives for gorilla-feast.
//!
//! Stored credentials use the salted SHA-1 (`{SSHA}`) format so that hashes
//! produced by older LDAP-style tooling keep verifying.
//!
//! ## Security Properties
//!
//! - Fresh salt from the OS random source for every hash
//! - Constant-time digest comparison
//! - Intermediate buffers are zeroized after use
//! - No unsafe code

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod errors;
pub mod hashing;
pub mod utils;

pub use constants::*;
pub use errors::CryptoError;
pub use hashing::*;
pub use utils::current_timestamp;
