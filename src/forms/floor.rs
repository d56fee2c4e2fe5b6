use serde::Deserialize;
use validator::Validate;

use crate::domain::floor::{NewFloor, UpdateFloor};
use crate::forms::{FormError, FormResult, sanitize_inline_text};

const NAME_MAX_LEN: u64 = 128;

/// Payload for creating a floor.
#[derive(Debug, Deserialize, Validate)]
pub struct AddFloorForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[serde(default)]
    pub position: i32,
}

impl AddFloorForm {
    pub fn into_new_floor(self) -> FormResult<NewFloor> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(FormError::EmptyField("floor name"));
        }

        Ok(NewFloor::new(name, self.position))
    }
}

/// Patch payload for an existing floor.
#[derive(Debug, Deserialize, Validate)]
pub struct EditFloorForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<i32>,
}

impl EditFloorForm {
    pub fn into_update_floor(self) -> FormResult<UpdateFloor> {
        self.validate()?;

        let mut update = UpdateFloor::new();

        if let Some(name) = self.name.as_deref() {
            let name = sanitize_inline_text(name);
            if name.is_empty() {
                return Err(FormError::EmptyField("floor name"));
            }
            update = update.name(name);
        }
        if let Some(position) = self.position {
            update = update.position(position);
        }

        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_floor_form_sanitizes_name() {
        let form = AddFloorForm {
            name: "  Terraza  norte ".to_string(),
            position: 2,
        };

        let new_floor = form.into_new_floor().expect("expected conversion");

        assert_eq!(new_floor.name, "Terraza norte");
        assert_eq!(new_floor.position, 2);
    }

    #[test]
    fn edit_floor_form_rejects_blank_name() {
        let form = EditFloorForm {
            name: Some(" \t ".to_string()),
            position: None,
        };

        assert!(matches!(
            form.into_update_floor(),
            Err(FormError::EmptyField("floor name"))
        ));
    }
}
