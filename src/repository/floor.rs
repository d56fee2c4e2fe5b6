use diesel::prelude::*;

use crate::{
    domain::floor::{
        Floor as DomainFloor, NewFloor as DomainNewFloor, UpdateFloor as DomainUpdateFloor,
    },
    models::floor::{Floor as DbFloor, NewFloor as DbNewFloor, UpdateFloor as DbUpdateFloor},
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, FloorReader, FloorWriter},
};

impl FloorReader for DieselRepository {
    fn get_floor_by_id(&self, id: i32) -> RepositoryResult<Option<DomainFloor>> {
        use crate::schema::floors;

        let mut conn = self.conn()?;
        let floor = floors::table
            .filter(floors::id.eq(id))
            .first::<DbFloor>(&mut conn)
            .optional()?;

        Ok(floor.map(Into::into))
    }

    fn list_floors(&self) -> RepositoryResult<Vec<DomainFloor>> {
        use crate::schema::floors;

        let mut conn = self.conn()?;
        let rows = floors::table
            .order((floors::position.asc(), floors::name.asc()))
            .load::<DbFloor>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl FloorWriter for DieselRepository {
    fn create_floor(&self, new_floor: &DomainNewFloor) -> RepositoryResult<DomainFloor> {
        use crate::schema::floors;

        let mut conn = self.conn()?;
        let db_new = DbNewFloor::from(new_floor);

        let created = diesel::insert_into(floors::table)
            .values(&db_new)
            .get_result::<DbFloor>(&mut conn)?;

        Ok(created.into())
    }

    fn update_floor(
        &self,
        floor_id: i32,
        updates: &DomainUpdateFloor,
    ) -> RepositoryResult<DomainFloor> {
        use crate::schema::floors;

        let mut conn = self.conn()?;

        if updates.name.is_none() && updates.position.is_none() {
            return floors::table
                .filter(floors::id.eq(floor_id))
                .first::<DbFloor>(&mut conn)
                .map(Into::into)
                .map_err(Into::into);
        }

        let db_updates = DbUpdateFloor::from(updates);
        let updated = diesel::update(floors::table.filter(floors::id.eq(floor_id)))
            .set(&db_updates)
            .get_result::<DbFloor>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_floor(&self, floor_id: i32) -> RepositoryResult<()> {
        use crate::schema::floors;

        let mut conn = self.conn()?;

        // The schema clears dining_tables.floor_id via ON DELETE SET NULL.
        let deleted =
            diesel::delete(floors::table.filter(floors::id.eq(floor_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
