use serde::Deserialize;
use validator::Validate;

use crate::domain::order::UpdateOrder;
use crate::forms::FormResult;

/// Body of the line actions on an order: `{"plato_id": 7}`.
#[derive(Debug, Deserialize, Validate)]
pub struct DishLineForm {
    #[validate(range(min = 1))]
    pub plato_id: i32,
}

impl DishLineForm {
    pub fn dish_id(self) -> FormResult<i32> {
        self.validate()?;
        Ok(self.plato_id)
    }
}

/// Patch payload for the plain order resource.
#[derive(Debug, Deserialize)]
pub struct EditOrderForm {
    #[serde(default)]
    pub completed: Option<bool>,
}

impl EditOrderForm {
    pub fn into_update_order(self) -> UpdateOrder {
        let mut update = UpdateOrder::new();
        if let Some(completed) = self.completed {
            update = update.completed(completed);
        }
        update
    }
}

/// Payload for creating a line through the line-item resource.
#[derive(Debug, Deserialize, Validate)]
pub struct AddOrderLineForm {
    #[validate(range(min = 1))]
    pub pedido_id: i32,
    #[validate(range(min = 1))]
    pub plato_id: i32,
    #[validate(range(min = 1))]
    #[serde(default = "default_quantity")]
    pub cantidad: i32,
}

impl AddOrderLineForm {
    pub fn into_parts(self) -> FormResult<(i32, i32, i32)> {
        self.validate()?;
        Ok((self.pedido_id, self.plato_id, self.cantidad))
    }
}

/// Patch payload for a line's quantity.
#[derive(Debug, Deserialize, Validate)]
pub struct EditOrderLineForm {
    #[validate(range(min = 1))]
    pub cantidad: i32,
}

impl EditOrderLineForm {
    pub fn quantity(self) -> FormResult<i32> {
        self.validate()?;
        Ok(self.cantidad)
    }
}

fn default_quantity() -> i32 {
    1
}
