use diesel::prelude::*;

use crate::domain::dining_table::{
    DiningTable as DomainDiningTable, NewDiningTable as DomainNewDiningTable, TableState,
    UpdateDiningTable as DomainUpdateDiningTable,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::dining_tables)]
pub struct DiningTable {
    pub id: i32,
    pub floor_id: Option<i32>,
    pub name: String,
    pub capacity: i32,
    pub state: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dining_tables)]
pub struct NewDiningTable<'a> {
    pub floor_id: Option<i32>,
    pub name: &'a str,
    pub capacity: i32,
    pub state: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::dining_tables)]
pub struct UpdateDiningTable<'a> {
    pub floor_id: Option<Option<i32>>,
    pub name: Option<&'a str>,
    pub capacity: Option<i32>,
}

impl From<DiningTable> for DomainDiningTable {
    fn from(value: DiningTable) -> Self {
        Self {
            id: value.id,
            floor_id: value.floor_id,
            name: value.name,
            capacity: value.capacity,
            state: value.state.as_str().into(),
        }
    }
}

impl<'a> From<&'a DomainNewDiningTable> for NewDiningTable<'a> {
    fn from(value: &'a DomainNewDiningTable) -> Self {
        Self {
            floor_id: value.floor_id,
            name: value.name.as_str(),
            capacity: value.capacity,
            state: TableState::Free.into(),
        }
    }
}

impl<'a> From<&'a DomainUpdateDiningTable> for UpdateDiningTable<'a> {
    fn from(value: &'a DomainUpdateDiningTable) -> Self {
        Self {
            floor_id: value.floor_id,
            name: value.name.as_deref(),
            capacity: value.capacity,
        }
    }
}
