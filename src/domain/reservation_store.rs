//! Concurrent in-memory reservation storage.
//!
//! [`ReservationStore`] keeps every live reservation behind a single
//! [`tokio::sync::RwLock`]. Mutations (`create`, `cancel`,
//! `update_status`) take the write lock over the whole store, so they are
//! linearizable; `list` and `get` take the read lock and see a
//! point-in-time snapshot.
//!
//! State lives only for the lifetime of the process. Nothing is persisted.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::reservation::{Reservation, ReservationInput, ReservationStatus};
use super::{InventoryCatalog, ReservationId};
use crate::error::GatewayError;

/// Lock-protected store contents.
#[derive(Debug, Default)]
struct StoreState {
    /// Live reservations keyed by issue sequence, giving creation order.
    by_sequence: BTreeMap<u64, Reservation>,
    /// Id → sequence index for lookups.
    index: HashMap<ReservationId, u64>,
    /// Last issued sequence number. Only ever increases.
    last_sequence: u64,
}

impl StoreState {
    fn get(&self, id: &ReservationId) -> Option<&Reservation> {
        self.index
            .get(id)
            .and_then(|seq| self.by_sequence.get(seq))
    }

    fn remove(&mut self, id: &ReservationId) -> Option<Reservation> {
        let seq = self.index.remove(id)?;
        self.by_sequence.remove(&seq)
    }
}

/// Outcome of [`ReservationStore::update_status`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    /// Status held before the update.
    pub previous: ReservationStatus,
    /// The reservation after the update. For a cancellation this is the
    /// removed record with status `cancelled`.
    pub reservation: Reservation,
}

/// Mutable collection of reservations plus its id source.
///
/// # Id assignment
///
/// Ids come from a sequence counter advanced inside the write-locked
/// critical section that inserts the record. Deriving ids from the number
/// of stored reservations would hand out duplicates after a cancellation
/// and under concurrent creates; the counter never rewinds, so an id is
/// never issued twice.
#[derive(Debug)]
pub struct ReservationStore {
    catalog: Arc<InventoryCatalog>,
    state: RwLock<StoreState>,
}

impl ReservationStore {
    /// Creates an empty store validating room references against `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<InventoryCatalog>) -> Self {
        Self {
            catalog,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Returns the catalog this store validates against.
    #[must_use]
    pub fn catalog(&self) -> &Arc<InventoryCatalog> {
        &self.catalog
    }

    /// Returns all live reservations in creation order.
    pub async fn list(&self) -> Vec<Reservation> {
        let state = self.state.read().await;
        state.by_sequence.values().cloned().collect()
    }

    /// Returns a single live reservation.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReservationNotFound`] if no live reservation
    /// has the given id.
    pub async fn get(&self, id: &ReservationId) -> Result<Reservation, GatewayError> {
        let state = self.state.read().await;
        state
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::ReservationNotFound(id.clone()))
    }

    /// Validates `input`, assigns a fresh id, and stores the reservation
    /// with status `confirmed`.
    ///
    /// Validation runs before the lock is taken; a failure leaves the store
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::InvalidRequest`] for missing or malformed fields.
    /// - [`GatewayError::RoomNotFound`] if the room is not in the catalog.
    /// - [`GatewayError::RoomUnavailable`] if the room is not bookable.
    pub async fn create(&self, input: ReservationInput) -> Result<Reservation, GatewayError> {
        let draft = input.validate(&self.catalog)?;

        let mut state = self.state.write().await;
        let sequence = state
            .last_sequence
            .checked_add(1)
            .ok_or_else(|| GatewayError::Internal("reservation ids exhausted".to_string()))?;
        let id = ReservationId::from_sequence(sequence);
        if state.index.contains_key(&id) {
            return Err(GatewayError::Internal(format!(
                "reservation {id} already exists"
            )));
        }

        let reservation = draft.into_reservation(id.clone());
        state.last_sequence = sequence;
        state.index.insert(id, sequence);
        state.by_sequence.insert(sequence, reservation.clone());
        Ok(reservation)
    }

    /// Removes a live reservation and returns it as it was before removal.
    ///
    /// Of several concurrent cancellations of the same id exactly one
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReservationNotFound`] if the reservation does
    /// not exist or was already cancelled.
    pub async fn cancel(&self, id: &ReservationId) -> Result<Reservation, GatewayError> {
        let mut state = self.state.write().await;
        state
            .remove(id)
            .ok_or_else(|| GatewayError::ReservationNotFound(id.clone()))
    }

    /// Moves a reservation to `status`.
    ///
    /// - `confirmed → completed` updates the stored record.
    /// - Requesting the current status is a no-op.
    /// - Any status `→ cancelled` removes the reservation, like
    ///   [`Self::cancel`], and returns it with status `cancelled`.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::ReservationNotFound`] if the reservation does not
    ///   exist.
    /// - [`GatewayError::InvalidStatusTransition`] for `completed →
    ///   confirmed`.
    pub async fn update_status(
        &self,
        id: &ReservationId,
        status: ReservationStatus,
    ) -> Result<StatusUpdate, GatewayError> {
        let mut state = self.state.write().await;
        let previous = state
            .get(id)
            .map(|r| r.status)
            .ok_or_else(|| GatewayError::ReservationNotFound(id.clone()))?;

        let reservation = match (previous, status) {
            (from, to) if from == to => state
                .get(id)
                .cloned()
                .ok_or_else(|| GatewayError::ReservationNotFound(id.clone()))?,
            (_, ReservationStatus::Cancelled) => {
                let mut removed = state
                    .remove(id)
                    .ok_or_else(|| GatewayError::ReservationNotFound(id.clone()))?;
                removed.status = ReservationStatus::Cancelled;
                removed
            }
            (ReservationStatus::Confirmed, ReservationStatus::Completed) => {
                let seq = state
                    .index
                    .get(id)
                    .copied()
                    .ok_or_else(|| GatewayError::ReservationNotFound(id.clone()))?;
                let entry = state
                    .by_sequence
                    .get_mut(&seq)
                    .ok_or_else(|| GatewayError::ReservationNotFound(id.clone()))?;
                entry.status = status;
                entry.clone()
            }
            (from, to) => return Err(GatewayError::InvalidStatusTransition { from, to }),
        };
        Ok(StatusUpdate {
            previous,
            reservation,
        })
    }

    /// Inserts each input through [`Self::create`], skipping invalid ones.
    ///
    /// Returns the reservations that were stored.
    pub async fn seed(&self, inputs: Vec<ReservationInput>) -> Vec<Reservation> {
        let mut stored = Vec::with_capacity(inputs.len());
        for input in inputs {
            match self.create(input).await {
                Ok(reservation) => stored.push(reservation),
                Err(err) => tracing::warn!(error = %err, "skipping invalid seed reservation"),
            }
        }
        stored
    }

    /// Returns the number of live reservations.
    pub async fn len(&self) -> usize {
        self.state.read().await.by_sequence.len()
    }

    /// Returns `true` if the store holds no live reservations.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.by_sequence.is_empty()
    }
}

/// The two sample bookings the demo starts with.
#[must_use]
pub fn sample_reservations() -> Vec<ReservationInput> {
    vec![
        ReservationInput {
            room_id: Some("1".to_string()),
            guest_name: Some("User A".to_string()),
            email: Some("a@mail.com".to_string()),
            phone: Some("123".to_string()),
            guests: Some(2),
            special_requests: Some("none".to_string()),
            check_in: Some("2025-12-01".to_string()),
            check_out: Some("2025-12-03".to_string()),
            total_price: None,
        },
        ReservationInput {
            room_id: Some("2".to_string()),
            guest_name: Some("User B".to_string()),
            email: Some("b@mail.com".to_string()),
            phone: Some("456".to_string()),
            guests: Some(3),
            special_requests: Some("early checkin".to_string()),
            check_in: Some("2025-12-05".to_string()),
            check_out: Some("2025-12-07".to_string()),
            total_price: None,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn make_store() -> Arc<ReservationStore> {
        let catalog = Arc::new(InventoryCatalog::with_default_rooms("http://localhost:8080"));
        Arc::new(ReservationStore::new(catalog))
    }

    fn booking(room_id: &str, guest: &str) -> ReservationInput {
        ReservationInput {
            room_id: Some(room_id.to_string()),
            guest_name: Some(guest.to_string()),
            guests: Some(2),
            check_in: Some("2025-12-01".to_string()),
            check_out: Some("2025-12-03".to_string()),
            ..ReservationInput::default()
        }
    }

    #[tokio::test]
    async fn create_happy_path() {
        let store = make_store();
        let created = tokio_test::assert_ok!(store.create(booking("1", "A")).await);
        assert_eq!(created.status, ReservationStatus::Confirmed);
        assert_eq!(created.room_id, "1");
        assert_eq!(created.nights(), 2);

        let list = store.list().await;
        assert_eq!(list.len(), 1);
        assert_eq!(list.first().map(|r| &r.id), Some(&created.id));
    }

    #[tokio::test]
    async fn create_with_unknown_room_leaves_store_unchanged() {
        let store = make_store();
        let _ = store.create(booking("1", "A")).await;

        let result = store.create(booking("999", "B")).await;
        assert!(matches!(result, Err(GatewayError::RoomNotFound(_))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn invalid_input_does_not_advance_ids() {
        let store = make_store();
        let bad = ReservationInput {
            check_in: Some("not-a-date".to_string()),
            ..booking("1", "A")
        };
        assert!(store.create(bad).await.is_err());

        let created = tokio_test::assert_ok!(store.create(booking("1", "A")).await);
        assert_eq!(created.id, ReservationId::from_sequence(1));
    }

    #[tokio::test]
    async fn list_preserves_creation_order() {
        let store = make_store();
        let mut expected = Vec::new();
        for guest in ["A", "B", "C", "D"] {
            let Ok(r) = store.create(booking("2", guest)).await else {
                panic!("create failed");
            };
            expected.push(r.id);
        }
        let ids: Vec<ReservationId> = store.list().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn cancel_then_list_excludes_reservation() {
        let store = make_store();
        let Ok(created) = store.create(booking("1", "A")).await else {
            panic!("create failed");
        };

        let cancelled = tokio_test::assert_ok!(store.cancel(&created.id).await);
        assert_eq!(cancelled, created);
        assert!(store.list().await.iter().all(|r| r.id != created.id));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn second_cancel_is_not_found() {
        let store = make_store();
        let Ok(created) = store.create(booking("1", "A")).await else {
            panic!("create failed");
        };
        assert!(store.cancel(&created.id).await.is_ok());
        let second = store.cancel(&created.id).await;
        assert!(matches!(second, Err(GatewayError::ReservationNotFound(_))));
    }

    #[tokio::test]
    async fn cancel_unknown_is_not_found() {
        let store = make_store();
        let result = store.cancel(&ReservationId::from("res_001")).await;
        assert!(matches!(result, Err(GatewayError::ReservationNotFound(_))));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_cancel() {
        let store = make_store();
        let Ok(first) = store.create(booking("1", "A")).await else {
            panic!("create failed");
        };
        let Ok(second) = store.create(booking("1", "B")).await else {
            panic!("create failed");
        };
        let _ = store.cancel(&second.id).await;

        let Ok(third) = store.create(booking("1", "C")).await else {
            panic!("create failed");
        };
        assert_ne!(third.id, first.id);
        assert_ne!(third.id, second.id);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_produce_unique_ids() {
        let store = make_store();
        let mut handles = Vec::new();
        for i in 0..64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create(booking("2", &format!("guest-{i}"))).await
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            let Ok(Ok(reservation)) = handle.await else {
                panic!("concurrent create failed");
            };
            assert!(ids.insert(reservation.id), "duplicate id issued");
        }

        let listed = store.list().await;
        assert_eq!(listed.len(), 64);
        let listed_ids: HashSet<ReservationId> = listed.into_iter().map(|r| r.id).collect();
        assert_eq!(listed_ids, ids);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_cancels_have_exactly_one_winner() {
        let store = make_store();
        let Ok(created) = store.create(booking("1", "A")).await else {
            panic!("create failed");
        };

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            let id = created.id.clone();
            handles.push(tokio::spawn(async move { store.cancel(&id).await }));
        }

        let mut successes = 0;
        let mut not_found = 0;
        for handle in handles {
            match handle.await {
                Ok(Ok(_)) => successes += 1,
                Ok(Err(GatewayError::ReservationNotFound(_))) => not_found += 1,
                _ => panic!("unexpected cancel outcome"),
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(not_found, 15);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn get_returns_live_reservation() {
        let store = make_store();
        let Ok(created) = store.create(booking("2", "A")).await else {
            panic!("create failed");
        };
        let fetched = tokio_test::assert_ok!(store.get(&created.id).await);
        assert_eq!(fetched, created);

        let _ = store.cancel(&created.id).await;
        assert!(store.get(&created.id).await.is_err());
    }

    #[tokio::test]
    async fn complete_then_reject_reconfirm() {
        let store = make_store();
        let Ok(created) = store.create(booking("1", "A")).await else {
            panic!("create failed");
        };

        let update = tokio_test::assert_ok!(
            store
                .update_status(&created.id, ReservationStatus::Completed)
                .await
        );
        assert_eq!(update.previous, ReservationStatus::Confirmed);
        assert_eq!(update.reservation.status, ReservationStatus::Completed);

        let back = store
            .update_status(&created.id, ReservationStatus::Confirmed)
            .await;
        assert!(matches!(
            back,
            Err(GatewayError::InvalidStatusTransition { .. })
        ));

        let Ok(listed) = store.get(&created.id).await else {
            panic!("reservation vanished");
        };
        assert_eq!(listed.status, ReservationStatus::Completed);
    }

    #[tokio::test]
    async fn same_status_is_noop() {
        let store = make_store();
        let Ok(created) = store.create(booking("1", "A")).await else {
            panic!("create failed");
        };
        let same = tokio_test::assert_ok!(
            store
                .update_status(&created.id, ReservationStatus::Confirmed)
                .await
        );
        assert_eq!(same.reservation, created);
    }

    #[tokio::test]
    async fn status_cancelled_removes_reservation() {
        let store = make_store();
        let Ok(created) = store.create(booking("1", "A")).await else {
            panic!("create failed");
        };
        let cancelled = tokio_test::assert_ok!(
            store
                .update_status(&created.id, ReservationStatus::Cancelled)
                .await
        );
        assert_eq!(cancelled.reservation.status, ReservationStatus::Cancelled);
        assert!(store.is_empty().await);
        assert!(store.cancel(&created.id).await.is_err());
    }

    #[tokio::test]
    async fn update_status_unknown_is_not_found() {
        let store = make_store();
        let result = store
            .update_status(&ReservationId::from("nope"), ReservationStatus::Completed)
            .await;
        assert!(matches!(result, Err(GatewayError::ReservationNotFound(_))));
    }

    #[tokio::test]
    async fn seed_stores_sample_bookings() {
        let store = make_store();
        let seeded = store.seed(sample_reservations()).await;
        assert_eq!(seeded.len(), 2);
        assert_eq!(store.len().await, 2);

        let Some(first) = seeded.first() else {
            panic!("no seeded reservation");
        };
        assert!((first.total_price - 3_000_000.0).abs() < f64::EPSILON);
    }
}
