//! Read-only room inventory.
//!
//! [`InventoryCatalog`] is built once at startup and shared behind an `Arc`.
//! It holds no lock: nothing mutates it after construction.

use super::Room;

/// Fixed, order-stable set of rooms.
#[derive(Debug, Clone, Default)]
pub struct InventoryCatalog {
    rooms: Vec<Room>,
}

impl InventoryCatalog {
    /// Creates a catalog from the given rooms, keeping their order.
    #[must_use]
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Creates the demo catalog. Image URLs are rooted at `asset_base_url`
    /// (e.g. `http://localhost:8080`), which serves `/assets/images/*`.
    #[must_use]
    pub fn with_default_rooms(asset_base_url: &str) -> Self {
        let base = asset_base_url.trim_end_matches('/');
        let image = |file: &str| format!("{base}/assets/images/{file}");
        let amenities =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| (*s).to_string()).collect() };

        Self::new(vec![
            Room {
                id: "1".to_string(),
                name: "Kamar Deluxe King".to_string(),
                room_type: "Deluxe".to_string(),
                price: 1_500_000.0,
                capacity: 2,
                description: "Kamar mewah dengan pemandangan kota dan ranjang king-size."
                    .to_string(),
                amenities: amenities(&["WiFi Gratis", "AC", "TV 42-inch", "Mini Bar"]),
                available: true,
                image: image("deluxe_king.jpg"),
            },
            Room {
                id: "2".to_string(),
                name: "Suite Junior".to_string(),
                room_type: "Suite".to_string(),
                price: 2_500_000.0,
                capacity: 3,
                description: "Ruang tamu terpisah dan fasilitas premium untuk kenyamanan ekstra."
                    .to_string(),
                amenities: amenities(&["WiFi Gratis", "AC", "TV 50-inch", "Kopi & Teh"]),
                available: true,
                image: image("suite_junior.jpg"),
            },
            Room {
                id: "3".to_string(),
                name: "Kamar Standar Twin".to_string(),
                room_type: "Standard".to_string(),
                price: 900_000.0,
                capacity: 2,
                description:
                    "Kamar nyaman dengan dua ranjang single, cocok untuk rekan bisnis."
                        .to_string(),
                amenities: amenities(&["WiFi Gratis", "AC", "TV 32-inch"]),
                available: false,
                image: image("standard_twin.jpg"),
            },
        ])
    }

    /// Returns every room in catalog order.
    #[must_use]
    pub fn list_rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn get(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    /// Number of rooms in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the catalog has no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_rooms_are_order_stable() {
        let catalog = InventoryCatalog::with_default_rooms("http://localhost:8080");
        let ids: Vec<&str> = catalog.list_rooms().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn image_urls_use_base() {
        let catalog = InventoryCatalog::with_default_rooms("https://hotel.example/");
        let Some(room) = catalog.get("1") else {
            panic!("room 1 missing");
        };
        assert_eq!(
            room.image,
            "https://hotel.example/assets/images/deluxe_king.jpg"
        );
    }

    #[test]
    fn get_unknown_room_is_none() {
        let catalog = InventoryCatalog::with_default_rooms("http://localhost:8080");
        assert!(catalog.get("999").is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = InventoryCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.list_rooms().is_empty());
    }
}
