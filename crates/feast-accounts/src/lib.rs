//! # feast-accounts
//!
//! Account registry and credential validation for gorilla-feast.
//!
//! ## Responsibilities
//!
//! - Signup, lookup, listing, update and deletion of accounts
//! - Input validation for account ids, full names and passwords
//! - Login: `{SSHA}` verification followed by session token issuance
//! - Reporting every failed login to the event bus without making the
//!   caller wait

pub mod errors;
mod service;
pub mod traits;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use errors::{AccountError, Result};
pub use service::AccountService;
pub use traits::Accounts;
pub use types::*;
