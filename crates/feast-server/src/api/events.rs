use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use feast_events::LoginFailureStream;
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;

use crate::state::AppState;

/// GET /login-failures: WebSocket stream of failed login attempts
///
/// One text frame per event. The subscription is taken before the upgrade
/// completes, so failures right after the handshake are not missed.
pub async fn login_failures(
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> Response {
    let events = state.login_failures.subscribe();
    ws.on_upgrade(move |socket| stream_login_failures(socket, events))
}

async fn stream_login_failures(socket: WebSocket, mut events: LoginFailureStream) {
    let (mut sender, mut receiver) = socket.split();
    tracing::debug!("Login failure observer connected");

    loop {
        tokio::select! {
            event = events.next() => {
                let Some(event) = event else { break };
                if let Err(e) = sender.send(Message::Text(event.description())).await {
                    tracing::debug!(error = %e, "Write to websocket failed");
                    break;
                }
            }
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Err(e)) => {
                    tracing::debug!(error = %e, "Websocket receive failed");
                    break;
                }
                Some(Ok(_)) => {}
            },
        }
    }

    let _ = sender.close().await;
    tracing::debug!("Login failure observer disconnected");
}
