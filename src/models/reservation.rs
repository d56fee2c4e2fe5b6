use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::reservation::{
    NewReservation as DomainNewReservation, Reservation as DomainReservation,
    UpdateReservation as DomainUpdateReservation,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reservations)]
pub struct Reservation {
    pub id: i32,
    pub table_id: Option<i32>,
    pub client_name: String,
    pub reserved_for: NaiveDateTime,
    pub party_size: i32,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reservations)]
pub struct NewReservation<'a> {
    pub table_id: Option<i32>,
    pub client_name: &'a str,
    pub reserved_for: NaiveDateTime,
    pub party_size: i32,
    pub notes: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::reservations)]
pub struct UpdateReservation<'a> {
    pub client_name: Option<&'a str>,
    pub reserved_for: Option<NaiveDateTime>,
    pub party_size: Option<i32>,
    pub notes: Option<Option<&'a str>>,
}

impl From<Reservation> for DomainReservation {
    fn from(value: Reservation) -> Self {
        Self {
            id: value.id,
            table_id: value.table_id,
            client_name: value.client_name,
            reserved_for: value.reserved_for,
            party_size: value.party_size,
            notes: value.notes,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewReservation> for NewReservation<'a> {
    fn from(value: &'a DomainNewReservation) -> Self {
        Self {
            table_id: Some(value.table_id),
            client_name: value.client_name.as_str(),
            reserved_for: value.reserved_for,
            party_size: value.party_size,
            notes: value.notes.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateReservation> for UpdateReservation<'a> {
    fn from(value: &'a DomainUpdateReservation) -> Self {
        Self {
            client_name: value.client_name.as_deref(),
            reserved_for: value.reserved_for,
            party_size: value.party_size,
            notes: value.notes.as_ref().map(|notes| notes.as_deref()),
        }
    }
}
