//! Bookable room record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A bookable unit of inventory.
///
/// Rooms are created once when the [`super::InventoryCatalog`] is built and
/// are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier (e.g. `"1"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Room category such as `Deluxe`, `Suite` or `Standard`.
    #[serde(rename = "type")]
    pub room_type: String,
    /// Nightly price in the hotel's currency unit.
    pub price: f64,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Free-text description.
    pub description: String,
    /// Amenities in display order.
    pub amenities: Vec<String>,
    /// Whether the room can currently be booked.
    pub available: bool,
    /// Image URI.
    pub image: String,
}

impl Room {
    /// Price for a stay of `nights` nights.
    #[must_use]
    pub fn price_for_nights(&self, nights: u32) -> f64 {
        self.price * f64::from(nights)
    }
}
