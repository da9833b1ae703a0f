//! Broadcast channel carrying login-failure events.

use crate::{errors::*, traits::EventPublisher, types::LoginFailureEvent};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, warn};

/// Default number of events buffered per subscriber
pub const DEFAULT_BUS_CAPACITY: usize = 16;

/// Process-wide login-failure bus
///
/// Cloning is cheap and every clone publishes into the same channel.
#[derive(Clone)]
pub struct LoginFailureBus {
    sender: broadcast::Sender<LoginFailureEvent>,
}

impl LoginFailureBus {
    /// Create a bus buffering up to `capacity` events per subscriber
    ///
    /// A zero capacity is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Hand an event to every current subscriber without waiting
    ///
    /// # Errors
    ///
    /// * `ChannelDropped` - nobody is subscribed; the event is gone
    pub fn send(&self, event: LoginFailureEvent) -> Result<usize> {
        self.sender.send(event).map_err(|_| EventError::ChannelDropped)
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> LoginFailureStream {
        LoginFailureStream {
            inner: BroadcastStream::new(self.sender.subscribe()),
        }
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for LoginFailureBus {
    fn default() -> Self {
        Self::new(DEFAULT_BUS_CAPACITY)
    }
}

#[async_trait]
impl EventPublisher for LoginFailureBus {
    async fn publish(&self, event: LoginFailureEvent) -> Result<()> {
        let receivers = self.send(event)?;
        debug!(receivers, "Published login failure event");
        Ok(())
    }
}

/// Subscriber side of the bus
///
/// Ends only when every `LoginFailureBus` clone has been dropped. Dropping
/// the stream unsubscribes.
pub struct LoginFailureStream {
    inner: BroadcastStream<LoginFailureEvent>,
}

impl Stream for LoginFailureStream {
    type Item = LoginFailureEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match self.inner.poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(event))) => return Poll::Ready(Some(event)),
                Poll::Ready(Some(Err(BroadcastStreamRecvError::Lagged(skipped)))) => {
                    warn!(skipped, "Login failure subscriber lagged, events skipped");
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
