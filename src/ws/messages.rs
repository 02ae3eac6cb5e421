//! WebSocket message types: envelope and commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level WebSocket message envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsMessage {
    /// Client-provided ID for requests; server-generated for events.
    pub id: String,
    /// Message type discriminator.
    #[serde(rename = "type")]
    pub msg_type: WsMessageType,
    /// ISO-8601 timestamp.
    pub timestamp: DateTime<Utc>,
    /// Variant-specific payload.
    pub payload: serde_json::Value,
}

impl WsMessage {
    /// Builds a server message stamped with the current time.
    #[must_use]
    pub fn new(id: String, msg_type: WsMessageType, payload: serde_json::Value) -> Self {
        Self {
            id,
            msg_type,
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Builds an error message with a numeric code.
    #[must_use]
    pub fn error(id: String, code: u16, message: &str) -> Self {
        Self::new(
            id,
            WsMessageType::Error,
            serde_json::json!({ "code": code, "message": message }),
        )
    }
}

/// Discriminator for WebSocket message types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WsMessageType {
    /// Client → Server command.
    Command,
    /// Server → Client response to a command.
    Response,
    /// Server → Client broadcast event.
    Event,
    /// Server → Client error.
    Error,
}

/// Commands that a client can send in the payload of a `command` message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WsCommand {
    /// Subscribe to events for specific rooms.
    Subscribe {
        /// Room IDs to subscribe to. Use `["*"]` for all rooms.
        room_ids: Vec<String>,
    },
    /// Unsubscribe from events for specific rooms.
    Unsubscribe {
        /// Room IDs to unsubscribe from.
        room_ids: Vec<String>,
    },
    /// Fetch the current reservation list.
    ListReservations,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_command_parses() {
        let payload = serde_json::json!({"command": "subscribe", "room_ids": ["1", "*"]});
        let Ok(cmd) = serde_json::from_value::<WsCommand>(payload) else {
            panic!("command should parse");
        };
        assert_eq!(
            cmd,
            WsCommand::Subscribe {
                room_ids: vec!["1".to_string(), "*".to_string()]
            }
        );
    }

    #[test]
    fn unit_command_parses() {
        let payload = serde_json::json!({"command": "list_reservations"});
        let cmd = serde_json::from_value::<WsCommand>(payload).ok();
        assert_eq!(cmd, Some(WsCommand::ListReservations));
    }

    #[test]
    fn error_envelope_serializes_type() {
        let msg = WsMessage::error("abc".to_string(), 400, "malformed JSON");
        let json = serde_json::to_string(&msg).unwrap_or_default();
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("malformed JSON"));
    }
}
