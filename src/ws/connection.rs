//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! dispatching incoming commands and forwarding filtered events.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use super::messages::{WsCommand, WsMessage, WsMessageType};
use super::subscription::SubscriptionManager;
use crate::domain::ReservationEvent;
use crate::service::ReservationService;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads commands from the client and dispatches them.
/// - Forwards events for subscribed rooms from the [`broadcast::Receiver`].
pub async fn run_connection(
    socket: WebSocket,
    mut event_rx: broadcast::Receiver<ReservationEvent>,
    service: Arc<ReservationService>,
) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut subs = SubscriptionManager::new();
    tracing::debug!("ws connection opened");

    loop {
        tokio::select! {
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let response = handle_text_message(text.as_str(), &mut subs, &service).await;
                        if let Some(resp_json) = response
                            && ws_tx.send(Message::text(resp_json)).await.is_err() {
                                break;
                            }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(error = %err, "ws receive failed");
                        break;
                    }
                    _ => {}
                }
            }
            event = event_rx.recv() => {
                match event {
                    Ok(event) => {
                        if !subs.matches(event.room_id()) {
                            continue;
                        }
                        let Some(json) = event_message(&event) else {
                            continue;
                        };
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(lagged = n, "ws client lagged behind event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!("ws connection closed");
}

/// Wraps a domain event in an `event` envelope.
fn event_message(event: &ReservationEvent) -> Option<String> {
    let payload = serde_json::to_value(event).ok()?;
    let msg = WsMessage::new(uuid::Uuid::new_v4().to_string(), WsMessageType::Event, payload);
    serde_json::to_string(&msg).ok()
}

/// Handles a text message from the client, returning an optional JSON response.
async fn handle_text_message(
    text: &str,
    subs: &mut SubscriptionManager,
    service: &ReservationService,
) -> Option<String> {
    let Ok(msg) = serde_json::from_str::<WsMessage>(text) else {
        return serde_json::to_string(&WsMessage::error(String::new(), 400, "malformed JSON")).ok();
    };

    if msg.msg_type != WsMessageType::Command {
        return serde_json::to_string(&WsMessage::error(msg.id, 400, "expected a command")).ok();
    }

    let Ok(command) = serde_json::from_value::<WsCommand>(msg.payload) else {
        return serde_json::to_string(&WsMessage::error(msg.id, 404, "unknown command")).ok();
    };

    let payload = match command {
        WsCommand::Subscribe { room_ids } => {
            subs.subscribe(&room_ids);
            serde_json::json!({
                "subscribed": room_ids,
                "count": subs.count(),
                "wildcard": subs.is_subscribed_all(),
            })
        }
        WsCommand::Unsubscribe { room_ids } => {
            subs.unsubscribe(&room_ids);
            serde_json::json!({
                "unsubscribed": room_ids,
                "remaining_count": subs.count(),
                "wildcard": subs.is_subscribed_all(),
            })
        }
        WsCommand::ListReservations => {
            let reservations = service.list_reservations().await;
            serde_json::json!({ "reservations": reservations })
        }
    };

    let response = WsMessage::new(msg.id, WsMessageType::Response, payload);
    serde_json::to_string(&response).ok()
}
