//! Reservation record, status, and the unvalidated booking input.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{InventoryCatalog, ReservationId};
use crate::error::GatewayError;

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Booked and active. Every new reservation starts here.
    Confirmed,
    /// The stay has been completed.
    Completed,
    /// Cancelled. Terminal; cancelled reservations leave the store.
    Cancelled,
}

impl ReservationStatus {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored booking of a room for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Store-assigned identifier, never reused.
    pub id: ReservationId,
    /// Booked room.
    pub room_id: String,
    /// Guest full name.
    pub guest_name: String,
    /// Contact email (may be empty).
    pub email: String,
    /// Contact phone (may be empty).
    pub phone: String,
    /// Number of guests, between 1 and the room capacity.
    pub guests: u32,
    /// Free-text requests (empty when none were given).
    pub special_requests: String,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date, strictly after `check_in`.
    pub check_out: NaiveDate,
    /// Nightly price × nights.
    pub total_price: f64,
    /// Current lifecycle status.
    pub status: ReservationStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Number of nights covered by the stay.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Client-supplied booking request, before validation.
///
/// Every field is optional so that a missing field is reported as a
/// validation failure with a readable message instead of a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationInput {
    /// Room to book.
    #[serde(default)]
    pub room_id: Option<String>,
    /// Guest full name.
    #[serde(default)]
    pub guest_name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Number of guests. Defaults to 1.
    #[serde(default)]
    pub guests: Option<i64>,
    /// Free-text requests.
    #[serde(default)]
    pub special_requests: Option<String>,
    /// Arrival date (`YYYY-MM-DD`).
    #[serde(default)]
    pub check_in: Option<String>,
    /// Departure date (`YYYY-MM-DD`).
    #[serde(default)]
    pub check_out: Option<String>,
    /// Client-computed total. Ignored; the store derives the total from the
    /// room price.
    #[serde(default)]
    pub total_price: Option<f64>,
}

/// A validated booking, ready to be assigned an id and stored.
#[derive(Debug, Clone)]
pub(crate) struct ReservationDraft {
    pub(crate) room_id: String,
    pub(crate) guest_name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) guests: u32,
    pub(crate) special_requests: String,
    pub(crate) check_in: NaiveDate,
    pub(crate) check_out: NaiveDate,
    pub(crate) total_price: f64,
}

impl ReservationDraft {
    pub(crate) fn into_reservation(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            room_id: self.room_id,
            guest_name: self.guest_name,
            email: self.email,
            phone: self.phone,
            guests: self.guests,
            special_requests: self.special_requests,
            check_in: self.check_in,
            check_out: self.check_out,
            total_price: self.total_price,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        }
    }
}

impl ReservationInput {
    /// Validates the input against the catalog.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::InvalidRequest`] for a missing or blank required
    ///   field, an unparseable date, `checkOut` not after `checkIn`, or a
    ///   guest count outside `1..=capacity`.
    /// - [`GatewayError::RoomNotFound`] if `roomId` is not in the catalog.
    /// - [`GatewayError::RoomUnavailable`] if the room is not bookable.
    pub(crate) fn validate(
        self,
        catalog: &InventoryCatalog,
    ) -> Result<ReservationDraft, GatewayError> {
        let room_id = required(self.room_id, "roomId")?;
        let guest_name = required(self.guest_name, "guestName")?;
        let check_in = parse_date(&required(self.check_in, "checkIn")?, "checkIn")?;
        let check_out = parse_date(&required(self.check_out, "checkOut")?, "checkOut")?;

        if check_out <= check_in {
            return Err(GatewayError::InvalidRequest(
                "checkOut must be after checkIn".to_string(),
            ));
        }
        let nights = u32::try_from((check_out - check_in).num_days())
            .map_err(|_| GatewayError::InvalidRequest("stay is too long".to_string()))?;

        let guests = self.guests.unwrap_or(1);
        if guests <= 0 {
            return Err(GatewayError::InvalidRequest(format!(
                "guests must be positive, got {guests}"
            )));
        }
        let guests = u32::try_from(guests)
            .map_err(|_| GatewayError::InvalidRequest(format!("guests is too large: {guests}")))?;

        let room = catalog
            .get(&room_id)
            .ok_or_else(|| GatewayError::RoomNotFound(room_id.clone()))?;
        if !room.available {
            return Err(GatewayError::RoomUnavailable(room_id));
        }
        if guests > room.capacity {
            return Err(GatewayError::InvalidRequest(format!(
                "room {room_id} holds at most {} guests, got {guests}",
                room.capacity
            )));
        }

        Ok(ReservationDraft {
            total_price: room.price_for_nights(nights),
            room_id,
            guest_name,
            email: self.email.unwrap_or_default().trim().to_string(),
            phone: self.phone.unwrap_or_default().trim().to_string(),
            guests,
            special_requests: self.special_requests.unwrap_or_default(),
            check_in,
            check_out,
        })
    }
}

/// Returns the trimmed field value, or a validation error if it is
/// missing or blank.
fn required(value: Option<String>, field: &str) -> Result<String, GatewayError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(GatewayError::InvalidRequest(format!(
            "missing required field: {field}"
        ))),
    }
}

/// Parses a strict `YYYY-MM-DD` date. Unpadded fields and signed years are
/// rejected even where chrono would accept them.
fn parse_date(value: &str, field: &str) -> Result<NaiveDate, GatewayError> {
    let invalid =
        || GatewayError::InvalidRequest(format!("{field} is not a valid date (YYYY-MM-DD): {value}"));
    let well_formed = value.len() == 10
        && value.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}
