use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Occupancy state of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableState {
    Free,
    Occupied,
    Reserved,
    Maintenance,
}

impl Default for TableState {
    fn default() -> Self {
        Self::Free
    }
}

impl From<&str> for TableState {
    fn from(value: &str) -> Self {
        match value {
            "Occupied" => Self::Occupied,
            "Reserved" => Self::Reserved,
            "Maintenance" => Self::Maintenance,
            _ => Self::Free,
        }
    }
}

impl From<TableState> for &'static str {
    fn from(value: TableState) -> Self {
        match value {
            TableState::Free => "Free",
            TableState::Occupied => "Occupied",
            TableState::Reserved => "Reserved",
            TableState::Maintenance => "Maintenance",
        }
    }
}

impl std::fmt::Display for TableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(<&str>::from(*self))
    }
}

/// A physical seating unit tracked with an occupancy state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i32,
    /// Owning floor; `None` once the floor has been deleted.
    pub floor_id: Option<i32>,
    /// Unique within its floor.
    pub name: String,
    pub capacity: i32,
    pub state: TableState,
}

/// Payload required to insert a new table. Tables always start `Free`.
#[derive(Debug, Clone)]
pub struct NewDiningTable {
    pub floor_id: Option<i32>,
    pub name: String,
    pub capacity: i32,
}

impl NewDiningTable {
    pub fn new(name: impl Into<String>, capacity: i32) -> Self {
        Self {
            floor_id: None,
            name: name.into(),
            capacity,
        }
    }

    pub fn with_floor_id(mut self, floor_id: i32) -> Self {
        self.floor_id = Some(floor_id);
        self
    }
}

/// Patch data applied when updating a table's descriptive fields.
///
/// Occupancy changes never go through here; they use the dedicated
/// lifecycle operations on the repository.
#[derive(Debug, Clone, Default)]
pub struct UpdateDiningTable {
    pub floor_id: Option<Option<i32>>,
    pub name: Option<String>,
    pub capacity: Option<i32>,
}

impl UpdateDiningTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floor_id(mut self, floor_id: Option<i32>) -> Self {
        self.floor_id = Some(floor_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

/// Query definition used to list tables.
#[derive(Debug, Clone, Default)]
pub struct TableListQuery {
    pub floor_id: Option<i32>,
    pub state: Option<TableState>,
    pub pagination: Option<Pagination>,
}

impl TableListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floor_id(mut self, floor_id: i32) -> Self {
        self.floor_id = Some(floor_id);
        self
    }

    pub fn state(mut self, state: TableState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
