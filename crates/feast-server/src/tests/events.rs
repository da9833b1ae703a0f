//! End-to-end test of the login-failure WebSocket stream.

use super::helpers::*;
use axum::http::StatusCode;
use futures_util::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::protocol::{frame::coding::CloseCode, CloseFrame};
use tokio_tungstenite::tungstenite::Message;

#[tokio::test]
async fn test_failed_login_streams_one_frame() {
    let state = create_test_state();
    let app = crate::create_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let served = app.clone();
    tokio::spawn(async move {
        axum::serve(listener, served).await.unwrap();
    });

    let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{}/login-failures", addr))
        .await
        .unwrap();

    // Wait until the handler has subscribed
    timeout(Duration::from_secs(2), async {
        while state.login_failures.subscriber_count() == 0 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();

    signup(&app, "alice", "Alice Smith", "password1").await;

    let response = timeout(
        Duration::from_secs(1),
        send(&app, form("POST", "/api/v1/login", "acct=alice&pwd=wrong-pass", None)),
    )
    .await
    .unwrap();
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let frame = timeout(Duration::from_secs(2), ws.next())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    match frame {
        Message::Text(text) => {
            assert!(text.contains("alice"));
            assert!(text.contains("password incorrect"));
        }
        other => panic!("Expected text frame, got: {:?}", other),
    }

    let extra = timeout(Duration::from_millis(200), ws.next()).await;
    assert!(extra.is_err(), "exactly one frame expected");

    ws.send(Message::Close(Some(CloseFrame {
        code: CloseCode::Normal,
        reason: "".into(),
    })))
    .await
    .unwrap();

    timeout(Duration::from_secs(2), async {
        while state.login_failures.subscriber_count() > 0 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();
}
