//! WebSocket message types for live dashboard updates.
//!
//! - Server → Client: connection status, updates, errors, pongs
//! - Client → Server: pings

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established.
    Connected(ConnectedMessage),

    /// Something on the dashboard changed.
    #[serde(rename = "dashboard.update")]
    Update(UpdateMessage),

    /// Error occurred.
    Error(ErrorMessage),

    /// Heartbeat response.
    Pong(PongMessage),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedMessage {
    pub client_id: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessage {
    pub update_type: LiveUpdateType,
    pub data: serde_json::Value,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

/// Kinds of live update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveUpdateType {
    /// A judgment was submitted; listings, analytics and judges are stale.
    JudgmentSubmitted,
    /// The favorites set changed.
    FavoritesChanged,
    /// The comparison set changed.
    ComparisonChanged,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PongMessage {
    pub timestamp: String,
}

// ============================================
// Client → Server Messages
// ============================================

/// All message types that can be received from client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Heartbeat request.
    Ping,
}

// ============================================
// Internal Types
// ============================================

/// Update travelling through the hub, before it is rendered for a client.
#[derive(Debug, Clone)]
pub struct LiveUpdate {
    pub update_type: LiveUpdateType,
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
    pub correlation_id: Option<String>,
}

impl LiveUpdate {
    pub fn to_server_message(&self) -> ServerMessage {
        ServerMessage::Update(UpdateMessage {
            update_type: self.update_type,
            data: self.data.clone(),
            timestamp: self.timestamp.as_datetime().to_rfc3339(),
            correlation_id: self.correlation_id.clone(),
        })
    }
}

impl ServerMessage {
    pub fn connected(client_id: impl ToString) -> Self {
        ServerMessage::Connected(ConnectedMessage {
            client_id: client_id.to_string(),
            timestamp: now_rfc3339(),
        })
    }

    pub fn pong() -> Self {
        ServerMessage::Pong(PongMessage {
            timestamp: now_rfc3339(),
        })
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        ServerMessage::Error(ErrorMessage {
            code: code.into(),
            message: message.into(),
            timestamp: now_rfc3339(),
        })
    }
}

fn now_rfc3339() -> String {
    Timestamp::now().as_datetime().to_rfc3339()
}
