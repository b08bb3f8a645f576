//! In-memory reservation store.
//!
//! The store owns the only authoritative copy of every reservation and is
//! the sole authority for id uniqueness. Other components borrow from it.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::Reservation;

/// A keyed collection of reservations.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use resort::{Reservation, ReservationRequest, ReservationStore, RoomType};
///
/// let mut store = ReservationStore::new();
/// let request = ReservationRequest {
///     id: "R1".to_string(),
///     guest_name: "Alice".to_string(),
///     address: String::new(),
///     contact_number: "555".to_string(),
///     room_type: RoomType::Single,
///     check_in: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(),
/// };
/// store.insert(Reservation::create(request.clone()).unwrap()).unwrap();
///
/// // Second insert with the same id fails and leaves the store unchanged
/// assert!(store.insert(Reservation::create(request).unwrap()).is_err());
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationStore {
    reservations: HashMap<String, Reservation>,
}

impl ReservationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if a reservation with the same id is
    /// already present.
    pub fn insert(&mut self, reservation: Reservation) -> Result<&Reservation> {
        use std::collections::hash_map::Entry;

        match self.reservations.entry(reservation.id().to_string()) {
            Entry::Occupied(entry) => Err(Error::DuplicateId {
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => Ok(&*entry.insert(reservation)),
        }
    }

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn get(&self, id: &str) -> Result<&Reservation> {
        self.reservations.get(id).ok_or_else(|| not_found(id))
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Result<&mut Reservation> {
        self.reservations.get_mut(id).ok_or_else(|| not_found(id))
    }

    /// Removes a reservation regardless of its status and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: &str) -> Result<Reservation> {
        self.reservations.remove(id).ok_or_else(|| not_found(id))
    }

    /// Returns `true` if a reservation with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.reservations.contains_key(id)
    }

    /// Returns every reservation, ordered by id.
    #[must_use]
    pub fn all(&self) -> Vec<&Reservation> {
        let mut all: Vec<_> = self.reservations.values().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    /// Returns the number of reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns `true` if the store holds no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

fn not_found(id: &str) -> Error {
    Error::NotFound {
        resource: format!("reservation {id}"),
    }
}
