/*!
 * Login-failure watcher
 */

use anyhow::{Context, Result};
use colored::*;
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::protocol::{frame::coding::CloseCode, CloseFrame};
use tokio_tungstenite::tungstenite::Message;

const LOGIN_FAILURES_PATH: &str = "/login-failures";

pub async fn watch(server: &str) -> Result<()> {
    let url = stream_url(server)?;

    let (socket, _) = tokio_tungstenite::connect_async(url.as_str())
        .await
        .with_context(|| format!("Error connecting to {}", url))?;
    println!("{} {}", "Connected to".green(), url);

    let (mut sender, mut receiver) = socket.split();
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            message = receiver.next() => match message {
                Some(Ok(Message::Text(text))) => println!("{}", text),
                Some(Ok(Message::Close(_))) | None => {
                    println!("{}", "Server closed the connection".yellow());
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    anyhow::bail!("Error reading from the server: {}", e);
                }
            },
            result = &mut interrupt => {
                result.context("Failed to listen for Ctrl-C")?;
                println!("{}", "Closing connection on interrupt from keyboard".yellow());
                sender
                    .send(Message::Close(Some(CloseFrame {
                        code: CloseCode::Normal,
                        reason: "".into(),
                    })))
                    .await
                    .context("Error sending close message to the server")?;
                break;
            }
        }
    }

    Ok(())
}

/// `http(s)://host:port` → `ws(s)://host:port/login-failures`
fn stream_url(server: &str) -> Result<String> {
    let server = server.trim_end_matches('/');

    let rest = if let Some(rest) = server.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = server.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else if server.starts_with("ws://") || server.starts_with("wss://") {
        server.to_string()
    } else {
        anyhow::bail!("Server URL must start with http://, https://, ws:// or wss://");
    };

    Ok(format!("{}{}", rest, LOGIN_FAILURES_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_url_schemes() {
        assert_eq!(
            stream_url("http://127.0.0.1:8080").unwrap(),
            "ws://127.0.0.1:8080/login-failures"
        );
        assert_eq!(
            stream_url("https://feast.example.com/").unwrap(),
            "wss://feast.example.com/login-failures"
        );
        assert_eq!(
            stream_url("ws://localhost:9000").unwrap(),
            "ws://localhost:9000/login-failures"
        );
        assert!(stream_url("localhost:8080").is_err());
    }
}
