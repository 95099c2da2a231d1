//! WebSocket handler for live session events.

use crate::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use tokio::sync::broadcast;
use tracing::debug;

/// WebSocket upgrade handler for /ws/events.
pub async fn events_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn send_json(socket: &mut WebSocket, kind: &str, data: impl serde::Serialize) -> bool {
    let msg = serde_json::json!({
        "type": kind,
        "data": data
    });
    match serde_json::to_string(&msg) {
        Ok(json) => socket.send(Message::Text(json.into())).await.is_ok(),
        Err(_) => true,
    }
}

async fn send_snapshot(socket: &mut WebSocket, state: &AppState) -> bool {
    match state.snapshot().await {
        Ok(snapshot) => send_json(socket, "snapshot", snapshot).await,
        Err(_) => false,
    }
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let mut rx = state.subscribe();

    if !send_snapshot(&mut socket, &state).await {
        return;
    }

    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(event) => {
                        if !send_json(&mut socket, "event", event).await {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Too slow; resync with a fresh snapshot.
                        debug!("WebSocket client lagged by {} events", skipped);
                        if !send_snapshot(&mut socket, &state).await {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Ok(cmd) = serde_json::from_str::<ClientCommand>(&text) {
                            let ok = match cmd {
                                ClientCommand::Snapshot => send_snapshot(&mut socket, &state).await,
                                ClientCommand::CycleMode => state.cycle_mode().await.is_ok(),
                            };
                            if !ok {
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }
}

/// Commands that can be sent over WebSocket.
#[derive(Debug, serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum ClientCommand {
    Snapshot,
    CycleMode,
}
