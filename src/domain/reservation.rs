use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// A future-dated hold against a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    /// Target table; `None` once the table has been deleted.
    pub table_id: Option<i32>,
    pub client_name: String,
    pub reserved_for: NaiveDateTime,
    pub party_size: i32,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub table_id: i32,
    pub client_name: String,
    pub reserved_for: NaiveDateTime,
    pub party_size: i32,
    pub notes: Option<String>,
}

impl NewReservation {
    pub fn new(
        table_id: i32,
        client_name: impl Into<String>,
        reserved_for: NaiveDateTime,
        party_size: i32,
    ) -> Self {
        Self {
            table_id,
            client_name: client_name.into(),
            reserved_for,
            party_size,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Patch data applied when updating an existing reservation.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservation {
    pub client_name: Option<String>,
    pub reserved_for: Option<NaiveDateTime>,
    pub party_size: Option<i32>,
    pub notes: Option<Option<String>>,
}

impl UpdateReservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub fn reserved_for(mut self, reserved_for: NaiveDateTime) -> Self {
        self.reserved_for = Some(reserved_for);
        self
    }

    pub fn party_size(mut self, party_size: i32) -> Self {
        self.party_size = Some(party_size);
        self
    }

    pub fn notes(mut self, notes: Option<impl Into<String>>) -> Self {
        self.notes = Some(notes.map(|value| value.into()));
        self
    }
}

/// Query definition used to list reservations.
#[derive(Debug, Clone, Default)]
pub struct ReservationListQuery {
    pub table_id: Option<i32>,
    pub pagination: Option<Pagination>,
}

impl ReservationListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_id(mut self, table_id: i32) -> Self {
        self.table_id = Some(table_id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
