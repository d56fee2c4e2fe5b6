use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::incident::{
    Incident as DomainIncident, NewIncident as DomainNewIncident,
    UpdateIncident as DomainUpdateIncident,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::incidents)]
pub struct Incident {
    pub id: i32,
    pub category: String,
    pub message: String,
    pub seen: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::incidents)]
pub struct NewIncident<'a> {
    pub category: &'a str,
    pub message: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::incidents)]
pub struct UpdateIncident<'a> {
    pub category: Option<&'a str>,
    pub message: Option<&'a str>,
}

impl From<Incident> for DomainIncident {
    fn from(value: Incident) -> Self {
        Self {
            id: value.id,
            category: value.category.as_str().into(),
            message: value.message,
            seen: value.seen,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewIncident> for NewIncident<'a> {
    fn from(value: &'a DomainNewIncident) -> Self {
        Self {
            category: value.category.into(),
            message: value.message.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateIncident> for UpdateIncident<'a> {
    fn from(value: &'a DomainUpdateIncident) -> Self {
        Self {
            category: value.category.map(|category| category.into()),
            message: value.message.as_deref(),
        }
    }
}
