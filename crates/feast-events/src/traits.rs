//! Publisher seam between the credential validator and the bus.

use crate::{types::LoginFailureEvent, Result};
use async_trait::async_trait;

/// Event publisher trait
///
/// Injected into the account service so tests can swap in a recorder
/// or a no-op.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a login-failure event
    async fn publish(&self, event: LoginFailureEvent) -> Result<()>;
}

/// Publisher that discards every event
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: LoginFailureEvent) -> Result<()> {
        Ok(())
    }
}
