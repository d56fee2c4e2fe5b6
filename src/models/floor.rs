use diesel::prelude::*;

use crate::domain::floor::{
    Floor as DomainFloor, NewFloor as DomainNewFloor, UpdateFloor as DomainUpdateFloor,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::floors)]
pub struct Floor {
    pub id: i32,
    pub name: String,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::floors)]
pub struct NewFloor<'a> {
    pub name: &'a str,
    pub position: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::floors)]
pub struct UpdateFloor<'a> {
    pub name: Option<&'a str>,
    pub position: Option<i32>,
}

impl From<Floor> for DomainFloor {
    fn from(value: Floor) -> Self {
        Self {
            id: value.id,
            name: value.name,
            position: value.position,
        }
    }
}

impl<'a> From<&'a DomainNewFloor> for NewFloor<'a> {
    fn from(value: &'a DomainNewFloor) -> Self {
        Self {
            name: value.name.as_str(),
            position: value.position,
        }
    }
}

impl<'a> From<&'a DomainUpdateFloor> for UpdateFloor<'a> {
    fn from(value: &'a DomainUpdateFloor) -> Self {
        Self {
            name: value.name.as_deref(),
            position: value.position,
        }
    }
}
