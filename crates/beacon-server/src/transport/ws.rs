//! WebSocket echo/chat endpoint.
//!
//! Responsibilities:
//! - Upgrade HTTP -> WS
//! - Extract an optional display name from the query string
//! - Text frames: broadcast as a chat envelope to every connected session
//!   (the sender is subscribed too, so it sees its own message echoed back)
//! - Binary frames: echo to the sender only
//! - Lifecycle: ping/pong + idle timeout

use axum::{
    extract::{
        ws::{Message, WebSocket},
        ws::WebSocketUpgrade,
        Query, State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::broadcast;
use tokio::time::{Duration, Instant};

use beacon_core::error::ClientCode;

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    #[serde(default)]
    pub name: Option<String>,
}

fn chat_msg_json(from: &str, msg: &str) -> String {
    json!({
        "type": "msg",
        "from": from,
        "msg": msg
    })
    .to_string()
}

fn sys_error_json(code: &str, msg: &str) -> String {
    json!({
        "type": "error",
        "code": code,
        "msg": msg
    })
    .to_string()
}

pub async fn ws_upgrade(
    State(app): State<AppState>,
    Query(q): Query<WsQuery>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| run_session(app, q, socket))
}

async fn run_session(app: AppState, q: WsQuery, socket: WebSocket) {
    let name = q.name.unwrap_or_else(|| "anonymous".to_string());

    // subscribe before splitting so no broadcast published after the
    // upgrade can be missed
    let mut chat_rx = app.chat().subscribe();
    let (mut ws_tx, mut ws_rx) = socket.split();

    let srv = &app.cfg().server;
    let ping_every = Duration::from_millis(srv.ping_interval_ms);
    let idle_timeout = Duration::from_millis(srv.idle_timeout_ms);

    let mut ping_tick = tokio::time::interval(ping_every);
    ping_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut last_activity = Instant::now();

    tracing::debug!(%name, "ws session started");

    loop {
        tokio::select! {
            // chat fan-in from other sessions (and our own publishes)
            broadcasted = chat_rx.recv() => {
                match broadcasted {
                    Ok(line) => {
                        if ws_tx.send(Message::Text(line)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(%name, skipped, "ws session lagged behind chat bus");
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }

            // inbound reader
            incoming = ws_rx.next() => {
                let Some(incoming) = incoming else { break; };
                let Ok(msg) = incoming else { break; };

                last_activity = Instant::now();

                match msg {
                    Message::Text(s) => {
                        let _ = app.chat().send(chat_msg_json(&name, &s));
                    }
                    Message::Binary(b) => {
                        if ws_tx.send(Message::Binary(b)).await.is_err() {
                            break;
                        }
                    }
                    Message::Ping(payload) => {
                        let _ = ws_tx.send(Message::Pong(payload)).await;
                    }
                    Message::Pong(_) => {}
                    Message::Close(_) => break,
                }
            }

            // ping
            _ = ping_tick.tick() => {
                if ws_tx.send(Message::Ping(Vec::new())).await.is_err() {
                    break;
                }
            }

            // idle timeout
            _ = tokio::time::sleep(Duration::from_millis(250)) => {
                if last_activity.elapsed() >= idle_timeout {
                    let _ = ws_tx.send(Message::Text(sys_error_json(ClientCode::Timeout.as_str(), "idle timeout"))).await;
                    break;
                }
            }
        }
    }

    tracing::debug!(%name, "ws session closed");
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn chat_envelope_shape() {
        let line = chat_msg_json("ana", "hello");
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["type"], "msg");
        assert_eq!(v["from"], "ana");
        assert_eq!(v["msg"], "hello");
    }

    #[test]
    fn error_envelope_uses_stable_codes() {
        let line = sys_error_json(ClientCode::Timeout.as_str(), "idle timeout");
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["type"], "error");
        assert_eq!(v["code"], "TIMEOUT");
    }
}
