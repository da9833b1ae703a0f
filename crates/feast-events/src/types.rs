//! Type definitions for login-failure events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single failed login attempt
///
/// The `Display` form is the text frame sent to streaming observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFailureEvent {
    /// Account id the attempt was made for (may not exist)
    pub acct: String,

    /// Internal failure reason, e.g. `password incorrect`
    pub reason: String,

    /// When the attempt failed (unix seconds)
    pub occurred_at: u64,
}

impl LoginFailureEvent {
    /// Create an event stamped with the current time
    pub fn new(acct: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            acct: acct.into(),
            reason: reason.into(),
            occurred_at: feast_crypto::current_timestamp(),
        }
    }

    /// Text frame for observers
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LoginFailureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Login failed for \"{}\" at {}: {}",
            self.acct, self.occurred_at, self.reason
        )
    }
}
