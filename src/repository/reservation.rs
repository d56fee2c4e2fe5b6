use diesel::prelude::*;

use crate::{
    domain::dining_table::TableState,
    domain::reservation::{
        NewReservation as DomainNewReservation, Reservation as DomainReservation,
        ReservationListQuery, UpdateReservation as DomainUpdateReservation,
    },
    models::reservation::{
        NewReservation as DbNewReservation, Reservation as DbReservation,
        UpdateReservation as DbUpdateReservation,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, ReservationReader, ReservationWriter},
};

impl ReservationReader for DieselRepository {
    fn get_reservation_by_id(&self, id: i32) -> RepositoryResult<Option<DomainReservation>> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;
        let reservation = reservations::table
            .filter(reservations::id.eq(id))
            .first::<DbReservation>(&mut conn)
            .optional()?;

        Ok(reservation.map(Into::into))
    }

    fn list_reservations(
        &self,
        query: ReservationListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainReservation>)> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;

        let mut count_query = reservations::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(table_id) = query.table_id {
            count_query = count_query.filter(reservations::table_id.eq(Some(table_id)));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = reservations::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(table_id) = query.table_id {
            items = items.filter(reservations::table_id.eq(Some(table_id)));
        }

        items = items.order(reservations::reserved_for.asc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbReservation>(&mut conn)?;

        Ok((total, rows.into_iter().map(Into::into).collect()))
    }
}

impl ReservationWriter for DieselRepository {
    fn create_reservation(
        &self,
        new_reservation: &DomainNewReservation,
    ) -> RepositoryResult<DomainReservation> {
        use crate::schema::{dining_tables, reservations};

        let mut conn = self.conn()?;

        conn.transaction::<DomainReservation, RepositoryError, _>(|conn| {
            // The table is flipped to Reserved regardless of its current
            // state; an occupied or already-reserved table is accepted.
            let flipped = diesel::update(
                dining_tables::table.filter(dining_tables::id.eq(new_reservation.table_id)),
            )
            .set(dining_tables::state.eq(<&str>::from(TableState::Reserved)))
            .execute(conn)?;
            if flipped == 0 {
                return Err(RepositoryError::NotFound);
            }

            let db_new = DbNewReservation::from(new_reservation);
            let created = diesel::insert_into(reservations::table)
                .values(&db_new)
                .get_result::<DbReservation>(conn)?;

            Ok(created.into())
        })
    }

    fn update_reservation(
        &self,
        reservation_id: i32,
        updates: &DomainUpdateReservation,
    ) -> RepositoryResult<DomainReservation> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;

        if updates.client_name.is_none()
            && updates.reserved_for.is_none()
            && updates.party_size.is_none()
            && updates.notes.is_none()
        {
            return reservations::table
                .filter(reservations::id.eq(reservation_id))
                .first::<DbReservation>(&mut conn)
                .map(Into::into)
                .map_err(Into::into);
        }

        let db_updates = DbUpdateReservation::from(updates);
        let updated =
            diesel::update(reservations::table.filter(reservations::id.eq(reservation_id)))
                .set(&db_updates)
                .get_result::<DbReservation>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_reservation(&self, reservation_id: i32) -> RepositoryResult<()> {
        use crate::schema::{dining_tables, reservations};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let reservation = reservations::table
                .filter(reservations::id.eq(reservation_id))
                .first::<DbReservation>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            diesel::delete(reservations::table.filter(reservations::id.eq(reservation_id)))
                .execute(conn)?;

            // The table reverts to Free unconditionally, even when other
            // reservations still target it.
            if let Some(table_id) = reservation.table_id {
                diesel::update(dining_tables::table.filter(dining_tables::id.eq(table_id)))
                    .set(dining_tables::state.eq(<&str>::from(TableState::Free)))
                    .execute(conn)?;
            }

            Ok(())
        })
    }
}
