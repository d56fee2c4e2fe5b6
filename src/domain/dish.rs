use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Menu section a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DishCategory {
    Starter,
    Main,
    Dessert,
    Drink,
}

impl From<&str> for DishCategory {
    fn from(value: &str) -> Self {
        match value {
            "Starter" => Self::Starter,
            "Dessert" => Self::Dessert,
            "Drink" => Self::Drink,
            _ => Self::Main,
        }
    }
}

impl From<DishCategory> for &'static str {
    fn from(value: DishCategory) -> Self {
        match value {
            DishCategory::Starter => "Starter",
            DishCategory::Main => "Main",
            DishCategory::Dessert => "Dessert",
            DishCategory::Drink => "Drink",
        }
    }
}

impl std::fmt::Display for DishCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(<&str>::from(*self))
    }
}

/// A menu entry. Prices are whole currency units (the menu is in CLP,
/// which has no minor unit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub category: DishCategory,
    /// Optional path or URL of a picture; uploads are handled elsewhere.
    pub image: Option<String>,
}

/// Payload required to insert a new dish.
#[derive(Debug, Clone)]
pub struct NewDish {
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub category: DishCategory,
    pub image: Option<String>,
}

impl NewDish {
    pub fn new(name: impl Into<String>, price: i32, category: DishCategory) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            category,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Patch data applied when updating an existing dish.
#[derive(Debug, Clone, Default)]
pub struct UpdateDish {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<i32>,
    pub category: Option<DishCategory>,
    pub image: Option<Option<String>>,
}

impl UpdateDish {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(|value| value.into()));
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn category(mut self, category: DishCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn image(mut self, image: Option<impl Into<String>>) -> Self {
        self.image = Some(image.map(|value| value.into()));
        self
    }
}

/// Query definition used to list dishes.
#[derive(Debug, Clone, Default)]
pub struct DishListQuery {
    pub category: Option<DishCategory>,
    /// Matches the name or description.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl DishListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: DishCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
