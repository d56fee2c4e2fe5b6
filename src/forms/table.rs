use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::domain::dining_table::{NewDiningTable, TableState, UpdateDiningTable};
use crate::forms::{FormError, FormResult, sanitize_inline_text};

const NAME_MAX_LEN: u64 = 128;

/// Payload for creating a table.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTableForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[serde(default)]
    pub floor_id: Option<i32>,
}

impl AddTableForm {
    pub fn into_new_table(self) -> FormResult<NewDiningTable> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(FormError::EmptyField("table name"));
        }

        let mut new_table = NewDiningTable::new(name, self.capacity);
        if let Some(floor_id) = self.floor_id {
            new_table = new_table.with_floor_id(floor_id);
        }

        Ok(new_table)
    }
}

/// Patch payload for a table's descriptive fields. `floor_id` omitted
/// leaves the floor untouched; an explicit `null` detaches the table.
#[derive(Debug, Deserialize, Validate)]
pub struct EditTableForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub floor_id: Option<Option<i32>>,
}

impl EditTableForm {
    pub fn into_update_table(self) -> FormResult<UpdateDiningTable> {
        self.validate()?;

        let mut update = UpdateDiningTable::new();

        if let Some(name) = self.name.as_deref() {
            let name = sanitize_inline_text(name);
            if name.is_empty() {
                return Err(FormError::EmptyField("table name"));
            }
            update = update.name(name);
        }
        if let Some(capacity) = self.capacity {
            update = update.capacity(capacity);
        }
        if let Some(floor_id) = self.floor_id {
            update = update.floor_id(floor_id);
        }

        Ok(update)
    }
}

/// Body of the state-change action: `{"estado": "Maintenance"}`.
#[derive(Debug, Deserialize)]
pub struct SetTableStateForm {
    pub estado: String,
}

impl SetTableStateForm {
    pub fn into_state(self) -> FormResult<TableState> {
        match self.estado.trim() {
            "Free" => Ok(TableState::Free),
            "Occupied" => Ok(TableState::Occupied),
            "Reserved" => Ok(TableState::Reserved),
            "Maintenance" => Ok(TableState::Maintenance),
            other => Err(FormError::InvalidValue {
                field: "estado",
                value: other.to_string(),
            }),
        }
    }
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(Some)
}
