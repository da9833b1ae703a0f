//! Error types for the event bus.

use thiserror::Error;

/// Result type alias for event operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Event bus errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    /// No subscriber was attached, so the event was dropped
    #[error("No subscriber attached, event dropped")]
    ChannelDropped,
}
