use diesel::prelude::*;

use crate::{
    domain::dining_table::{
        DiningTable as DomainDiningTable, NewDiningTable as DomainNewDiningTable, TableListQuery,
        TableState, UpdateDiningTable as DomainUpdateDiningTable,
    },
    models::dining_table::{
        DiningTable as DbDiningTable, NewDiningTable as DbNewDiningTable,
        UpdateDiningTable as DbUpdateDiningTable,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, DiningTableReader, DiningTableWriter},
};

impl DiningTableReader for DieselRepository {
    fn get_table_by_id(&self, id: i32) -> RepositoryResult<Option<DomainDiningTable>> {
        use crate::schema::dining_tables;

        let mut conn = self.conn()?;
        let table = dining_tables::table
            .filter(dining_tables::id.eq(id))
            .first::<DbDiningTable>(&mut conn)
            .optional()?;

        Ok(table.map(Into::into))
    }

    fn list_tables(
        &self,
        query: TableListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainDiningTable>)> {
        use crate::schema::dining_tables;

        let mut conn = self.conn()?;

        let state_filter: Option<&'static str> = query.state.map(Into::into);

        let mut count_query = dining_tables::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(floor_id) = query.floor_id {
            count_query = count_query.filter(dining_tables::floor_id.eq(Some(floor_id)));
        }
        if let Some(state) = state_filter {
            count_query = count_query.filter(dining_tables::state.eq(state));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = dining_tables::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(floor_id) = query.floor_id {
            items = items.filter(dining_tables::floor_id.eq(Some(floor_id)));
        }
        if let Some(state) = state_filter {
            items = items.filter(dining_tables::state.eq(state));
        }

        items = items.order((dining_tables::floor_id.asc(), dining_tables::name.asc()));

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbDiningTable>(&mut conn)?;

        Ok((total, rows.into_iter().map(Into::into).collect()))
    }
}

impl DiningTableWriter for DieselRepository {
    fn create_table(
        &self,
        new_table: &DomainNewDiningTable,
    ) -> RepositoryResult<DomainDiningTable> {
        use crate::schema::dining_tables;

        let mut conn = self.conn()?;
        let db_new = DbNewDiningTable::from(new_table);

        let created = diesel::insert_into(dining_tables::table)
            .values(&db_new)
            .get_result::<DbDiningTable>(&mut conn)?;

        Ok(created.into())
    }

    fn update_table(
        &self,
        table_id: i32,
        updates: &DomainUpdateDiningTable,
    ) -> RepositoryResult<DomainDiningTable> {
        use crate::schema::dining_tables;

        let mut conn = self.conn()?;

        if updates.floor_id.is_none() && updates.name.is_none() && updates.capacity.is_none() {
            return dining_tables::table
                .filter(dining_tables::id.eq(table_id))
                .first::<DbDiningTable>(&mut conn)
                .map(Into::into)
                .map_err(Into::into);
        }

        let db_updates = DbUpdateDiningTable::from(updates);
        let updated =
            diesel::update(dining_tables::table.filter(dining_tables::id.eq(table_id)))
                .set(&db_updates)
                .get_result::<DbDiningTable>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_table(&self, table_id: i32) -> RepositoryResult<()> {
        use crate::schema::dining_tables;

        let mut conn = self.conn()?;

        // Orders cascade away with the table; reservations keep their
        // row with table_id cleared.
        let deleted = diesel::delete(dining_tables::table.filter(dining_tables::id.eq(table_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn set_table_state(
        &self,
        table_id: i32,
        target: TableState,
    ) -> RepositoryResult<DomainDiningTable> {
        use crate::schema::dining_tables;

        let mut conn = self.conn()?;

        conn.transaction::<DomainDiningTable, RepositoryError, _>(|conn| {
            if !matches!(target, TableState::Free | TableState::Maintenance) {
                return Err(RepositoryError::Conflict(format!(
                    "state can only be forced to Free or Maintenance, not {target}"
                )));
            }

            let current = dining_tables::table
                .filter(dining_tables::id.eq(table_id))
                .first::<DbDiningTable>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            if TableState::from(current.state.as_str()) == TableState::Occupied {
                return Err(RepositoryError::Conflict(
                    "table is occupied by an active order".to_string(),
                ));
            }

            let updated = diesel::update(dining_tables::table.filter(dining_tables::id.eq(table_id)))
                .set(dining_tables::state.eq(<&str>::from(target)))
                .get_result::<DbDiningTable>(conn)?;

            Ok(updated.into())
        })
    }
}
