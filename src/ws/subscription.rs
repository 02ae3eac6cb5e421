//! Per-connection subscription manager.
//!
//! Tracks which room IDs a WebSocket client is subscribed to and
//! provides server-side event filtering.

use std::collections::HashSet;

/// Wildcard room ID matching every room.
pub const WILDCARD: &str = "*";

/// Manages the set of room subscriptions for a single WebSocket connection.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    /// Subscribed room IDs. If `subscribe_all` is true, this set is ignored.
    room_ids: HashSet<String>,
    /// Whether the client subscribes to all rooms (wildcard `"*"`).
    subscribe_all: bool,
}

impl SubscriptionManager {
    /// Creates a new empty subscription manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds room IDs to the subscription set. `"*"` enables the wildcard.
    pub fn subscribe(&mut self, ids: &[String]) {
        for id in ids {
            if id == WILDCARD {
                self.subscribe_all = true;
            } else {
                self.room_ids.insert(id.clone());
            }
        }
    }

    /// Removes room IDs from the subscription set. `"*"` clears the
    /// wildcard.
    pub fn unsubscribe(&mut self, ids: &[String]) {
        for id in ids {
            if id == WILDCARD {
                self.subscribe_all = false;
            } else {
                self.room_ids.remove(id);
            }
        }
    }

    /// Returns `true` if the given room ID matches the subscription filter.
    #[must_use]
    pub fn matches(&self, room_id: &str) -> bool {
        self.subscribe_all || self.room_ids.contains(room_id)
    }

    /// Returns the number of explicitly subscribed room IDs.
    #[must_use]
    pub fn count(&self) -> usize {
        self.room_ids.len()
    }

    /// Returns `true` if the wildcard subscription is active.
    #[must_use]
    pub fn is_subscribed_all(&self) -> bool {
        self.subscribe_all
    }
}
