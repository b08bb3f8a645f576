//! Snapshot reads and writes for reservations.
//!
//! Every save replaces the table contents with the full store inside one
//! transaction, and every load reads the whole table back.

use chrono::NaiveDate;
use rusqlite::{params, TransactionBehavior};

use crate::error::{Error, Result};
use crate::{ManualStatus, Reservation, ReservationStore, RoomType};

use super::connection::Database;
use super::schema::{DELETE_ALL_RESERVATIONS, INSERT_RESERVATION, LIST_RESERVATIONS};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A reservation row as stored, before any field is interpreted.
struct RawRow {
    id: String,
    guest_name: String,
    address: String,
    contact_number: String,
    room_type: String,
    check_in: String,
    check_out: String,
    total_cost: i64,
    manual_status: Option<String>,
}

impl RawRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            guest_name: row.get(1)?,
            address: row.get(2)?,
            contact_number: row.get(3)?,
            room_type: row.get(4)?,
            check_in: row.get(5)?,
            check_out: row.get(6)?,
            total_cost: row.get(7)?,
            manual_status: row.get(8)?,
        })
    }

    fn into_reservation(self) -> Result<Reservation> {
        let corrupt = |what: &str, value: &str| Error::LoadCorruption {
            details: format!("reservation '{}' has invalid {what} '{value}'", self.id),
        };

        let room_type = self
            .room_type
            .parse::<RoomType>()
            .map_err(|_| corrupt("room type", &self.room_type))?;
        let check_in = NaiveDate::parse_from_str(&self.check_in, DATE_FORMAT)
            .map_err(|_| corrupt("check-in date", &self.check_in))?;
        let check_out = NaiveDate::parse_from_str(&self.check_out, DATE_FORMAT)
            .map_err(|_| corrupt("check-out date", &self.check_out))?;
        let manual_status = match &self.manual_status {
            Some(raw) => Some(raw.parse::<ManualStatus>().map_err(|_| corrupt("status", raw))?),
            None => None,
        };

        Ok(Reservation::restore(
            self.id,
            self.guest_name,
            self.address,
            self.contact_number,
            room_type,
            check_in,
            check_out,
            self.total_cost,
            manual_status,
        ))
    }
}

impl Database {
    /// Replaces every stored reservation with the contents of `store`.
    ///
    /// This operation is atomic: either the whole snapshot is written or the
    /// previous contents remain.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any statement
    /// fails, or the commit fails.
    pub fn save_snapshot(&mut self, store: &ReservationStore) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(DELETE_ALL_RESERVATIONS, [])?;
        {
            let mut stmt = tx.prepare(INSERT_RESERVATION)?;
            for reservation in store.all() {
                stmt.execute(params![
                    reservation.id(),
                    reservation.guest_name(),
                    reservation.address(),
                    reservation.contact_number(),
                    reservation.room_type().as_str(),
                    reservation.check_in().format(DATE_FORMAT).to_string(),
                    reservation.check_out().format(DATE_FORMAT).to_string(),
                    reservation.total_cost(),
                    reservation.manual_status().map(|s| s.as_str()),
                ])?;
            }
        }

        tx.commit()?;
        log::debug!("saved {} reservations", store.len());
        Ok(())
    }

    /// Reads every stored reservation into a new store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoadCorruption`] if a row holds a value that cannot
    /// be interpreted, or a database error if the query fails.
    pub fn load_snapshot(&self) -> Result<ReservationStore> {
        let mut stmt = self.conn.prepare(LIST_RESERVATIONS)?;
        let rows = stmt
            .query_map([], RawRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut store = ReservationStore::new();
        for row in rows {
            store.insert(row.into_reservation()?)?;
        }

        log::debug!("loaded {} reservations", store.len());
        Ok(store)
    }
}
