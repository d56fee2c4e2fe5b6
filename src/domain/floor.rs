use serde::{Deserialize, Serialize};

/// A named grouping of tables, ordered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: i32,
    /// Unique across the whole restaurant.
    pub name: String,
    /// Display ordering, lowest first.
    pub position: i32,
}

/// Payload required to insert a new floor.
#[derive(Debug, Clone)]
pub struct NewFloor {
    pub name: String,
    pub position: i32,
}

impl NewFloor {
    pub fn new(name: impl Into<String>, position: i32) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Patch data applied when updating an existing floor.
#[derive(Debug, Clone, Default)]
pub struct UpdateFloor {
    pub name: Option<String>,
    pub position: Option<i32>,
}

impl UpdateFloor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }
}
