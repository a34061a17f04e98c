//! WebSocket upgrade handler for live dashboard updates.
//!
//! Connection lifecycle:
//! 1. Upgrade to WebSocket
//! 2. Join the live hub and send a `connected` message
//! 3. Forward hub updates and answer pings until either side closes
//! 4. Leave the hub

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use super::hub::{ClientId, LiveHub};
use super::messages::{ClientMessage, ServerMessage};

/// Handle WebSocket upgrade requests.
///
/// Route: `GET /api/live`
pub async fn ws_handler(ws: WebSocketUpgrade, State(hub): State<Arc<LiveHub>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

/// Run one connection until the client goes away.
async fn handle_socket(socket: WebSocket, hub: Arc<LiveHub>) {
    let (mut sender, mut receiver) = socket.split();
    let client_id = ClientId::new();
    let mut updates = hub.join(client_id.clone());

    tracing::debug!(client_id = %client_id, clients = hub.client_count(), "Live client connected");

    if let Err(e) = send_message(&mut sender, &ServerMessage::connected(&client_id)).await {
        tracing::debug!(client_id = %client_id, "Failed to send connected message: {}", e);
        hub.leave(&client_id);
        return;
    }

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(update) => {
                    if let Err(e) = send_message(&mut sender, &update.to_server_message()).await {
                        tracing::debug!(client_id = %client_id, "Send error, closing connection: {}", e);
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(client_id = %client_id, skipped, "Live client lagged");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    let reply = match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(ClientMessage::Ping) => ServerMessage::pong(),
                        Err(_) => ServerMessage::error("INVALID_MESSAGE", "Unrecognized message"),
                    };
                    if send_message(&mut sender, &reply).await.is_err() {
                        break;
                    }
                }
                Some(Ok(Message::Binary(_))) => {
                    tracing::warn!(client_id = %client_id, "Received unsupported binary message");
                }
                // Protocol pings and pongs are handled by axum
                Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => {}
                Some(Ok(Message::Close(_))) | None => break,
                Some(Err(e)) => {
                    tracing::debug!(client_id = %client_id, "Receive error: {}", e);
                    break;
                }
            },
        }
    }

    drop(updates);
    hub.leave(&client_id);
    tracing::debug!(client_id = %client_id, "Live client disconnected");
}

/// Send a JSON message over the WebSocket.
async fn send_message(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}

/// Router for the live endpoint.
pub fn live_router() -> axum::Router<Arc<LiveHub>> {
    use axum::routing::get;

    axum::Router::new().route("/live", get(ws_handler))
}
