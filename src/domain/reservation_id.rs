//! Type-safe reservation identifier.
//!
//! [`ReservationId`] is a newtype wrapper around the string form of an id
//! so that reservation ids cannot be confused with room ids.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a reservation.
///
/// Store-issued ids have the form `RES-000042`, derived from the store's
/// monotonically increasing sequence counter. Ids received from clients
/// (path parameters) are wrapped as-is and simply fail to match if they
/// were never issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    /// Builds the id issued for the given store sequence number.
    #[must_use]
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("RES-{sequence:06}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReservationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ReservationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ReservationId> for String {
    fn from(id: ReservationId) -> Self {
        id.0
    }
}
