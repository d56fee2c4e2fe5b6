use diesel::prelude::*;

use crate::domain::dish::{
    Dish as DomainDish, NewDish as DomainNewDish, UpdateDish as DomainUpdateDish,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::dishes)]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub category: String,
    pub image: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dishes)]
pub struct NewDish<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: i32,
    pub category: &'a str,
    pub image: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::dishes)]
pub struct UpdateDish<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub price: Option<i32>,
    pub category: Option<&'a str>,
    pub image: Option<Option<&'a str>>,
}

impl From<Dish> for DomainDish {
    fn from(value: Dish) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            category: value.category.as_str().into(),
            image: value.image,
        }
    }
}

impl<'a> From<&'a DomainNewDish> for NewDish<'a> {
    fn from(value: &'a DomainNewDish) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            price: value.price,
            category: value.category.into(),
            image: value.image.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateDish> for UpdateDish<'a> {
    fn from(value: &'a DomainUpdateDish) -> Self {
        Self {
            name: value.name.as_deref(),
            description: value
                .description
                .as_ref()
                .map(|description| description.as_deref()),
            price: value.price,
            category: value.category.map(|category| category.into()),
            image: value.image.as_ref().map(|image| image.as_deref()),
        }
    }
}
