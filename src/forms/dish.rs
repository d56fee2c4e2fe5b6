use serde::Deserialize;
use validator::Validate;

use crate::domain::dish::{DishCategory, NewDish, UpdateDish};
use crate::forms::{
    FormError, FormResult, sanitize_inline_text, sanitize_multiline_text, sanitize_optional_text,
};

const NAME_MAX_LEN: u64 = 128;
const DESCRIPTION_MAX_LEN: u64 = 2048;

/// Payload for adding a menu entry, from the menu page form or
/// `POST /api/platos/`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddDishForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price: i32,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl AddDishForm {
    pub fn into_new_dish(self) -> FormResult<NewDish> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(FormError::EmptyField("dish name"));
        }

        let category = parse_category(&self.category)?;

        let mut new_dish = NewDish::new(name, self.price, category);
        if let Some(description) = sanitize_optional_text(self.description.as_deref()) {
            new_dish = new_dish.with_description(description);
        }
        if let Some(image) = self.image.as_deref().map(sanitize_inline_text)
            && !image.is_empty()
        {
            new_dish = new_dish.with_image(image);
        }

        Ok(new_dish)
    }
}

/// Patch payload for an existing menu entry. Omitted fields are left
/// untouched; an empty description or image clears the stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct EditDishForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl EditDishForm {
    pub fn into_update_dish(self) -> FormResult<UpdateDish> {
        self.validate()?;

        let mut update = UpdateDish::new();

        if let Some(name) = self.name.as_deref() {
            let name = sanitize_inline_text(name);
            if name.is_empty() {
                return Err(FormError::EmptyField("dish name"));
            }
            update = update.name(name);
        }
        if let Some(description) = self.description.as_deref() {
            let description = sanitize_multiline_text(description);
            update = update.description((!description.is_empty()).then_some(description));
        }
        if let Some(price) = self.price {
            update = update.price(price);
        }
        if let Some(category) = self.category.as_deref() {
            update = update.category(parse_category(category)?);
        }
        if let Some(image) = self.image.as_deref() {
            let image = sanitize_inline_text(image);
            update = update.image((!image.is_empty()).then_some(image));
        }

        Ok(update)
    }
}

fn parse_category(value: &str) -> FormResult<DishCategory> {
    match value.trim() {
        "Starter" => Ok(DishCategory::Starter),
        "Main" => Ok(DishCategory::Main),
        "Dessert" => Ok(DishCategory::Dessert),
        "Drink" => Ok(DishCategory::Drink),
        other => Err(FormError::InvalidValue {
            field: "category",
            value: other.to_string(),
        }),
    }
}
