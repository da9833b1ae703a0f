//! # feast-events
//!
//! Process-wide broadcast of login-failure events.
//!
//! ## Responsibilities
//!
//! - Carrying a plain-text failure description from the credential validator
//!   to any number of streaming observers
//! - Best-effort, at-most-once delivery: events published while nobody is
//!   listening are dropped
//! - Lag tolerance: a slow subscriber skips what it missed instead of
//!   stalling publishers

mod bus;
pub mod errors;
pub mod traits;
pub mod types;

pub use bus::{LoginFailureBus, LoginFailureStream, DEFAULT_BUS_CAPACITY};
pub use errors::{EventError, Result};
pub use traits::{EventPublisher, NoOpEventPublisher};
pub use types::*;
