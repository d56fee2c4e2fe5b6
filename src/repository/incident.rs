use diesel::prelude::*;

use crate::{
    domain::incident::{
        Incident as DomainIncident, IncidentListQuery, NewIncident as DomainNewIncident,
        UpdateIncident as DomainUpdateIncident,
    },
    models::incident::{
        Incident as DbIncident, NewIncident as DbNewIncident, UpdateIncident as DbUpdateIncident,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, IncidentReader, IncidentWriter},
};

impl IncidentReader for DieselRepository {
    fn get_incident_by_id(&self, id: i32) -> RepositoryResult<Option<DomainIncident>> {
        use crate::schema::incidents;

        let mut conn = self.conn()?;
        let incident = incidents::table
            .filter(incidents::id.eq(id))
            .first::<DbIncident>(&mut conn)
            .optional()?;

        Ok(incident.map(Into::into))
    }

    fn list_incidents(
        &self,
        query: IncidentListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainIncident>)> {
        use crate::schema::incidents;

        let mut conn = self.conn()?;

        let mut count_query = incidents::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(seen) = query.seen {
            count_query = count_query.filter(incidents::seen.eq(seen));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = incidents::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(seen) = query.seen {
            items = items.filter(incidents::seen.eq(seen));
        }

        items = items.order(incidents::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbIncident>(&mut conn)?;

        Ok((total, rows.into_iter().map(Into::into).collect()))
    }
}

impl IncidentWriter for DieselRepository {
    fn create_incident(&self, new_incident: &DomainNewIncident) -> RepositoryResult<DomainIncident> {
        use crate::schema::incidents;

        let mut conn = self.conn()?;
        let db_new = DbNewIncident::from(new_incident);

        let created = diesel::insert_into(incidents::table)
            .values(&db_new)
            .get_result::<DbIncident>(&mut conn)?;

        Ok(created.into())
    }

    fn update_incident(
        &self,
        incident_id: i32,
        updates: &DomainUpdateIncident,
    ) -> RepositoryResult<DomainIncident> {
        use crate::schema::incidents;

        let mut conn = self.conn()?;

        if updates.category.is_none() && updates.message.is_none() {
            return incidents::table
                .filter(incidents::id.eq(incident_id))
                .first::<DbIncident>(&mut conn)
                .map(Into::into)
                .map_err(Into::into);
        }

        let db_updates = DbUpdateIncident::from(updates);
        let updated = diesel::update(incidents::table.filter(incidents::id.eq(incident_id)))
            .set(&db_updates)
            .get_result::<DbIncident>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_incident(&self, incident_id: i32) -> RepositoryResult<()> {
        use crate::schema::incidents;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(incidents::table.filter(incidents::id.eq(incident_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn mark_seen(&self, incident_id: i32) -> RepositoryResult<DomainIncident> {
        use crate::schema::incidents;

        let mut conn = self.conn()?;

        let updated = diesel::update(incidents::table.filter(incidents::id.eq(incident_id)))
            .set(incidents::seen.eq(true))
            .get_result::<DbIncident>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.into())
    }
}
