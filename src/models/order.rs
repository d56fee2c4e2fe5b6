use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    Order as DomainOrder, OrderItem as DomainOrderItem, OrderLine as DomainOrderLine,
};
use crate::models::dish::Dish as DbDish;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub table_id: i32,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub dish_id: i32,
    pub quantity: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub table_id: i32,
    pub completed: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub dish_id: i32,
    pub quantity: i32,
}

impl From<OrderItem> for DomainOrderLine {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            order_id: item.order_id,
            dish_id: item.dish_id,
            quantity: item.quantity,
        }
    }
}

impl Order {
    /// Assemble the domain order from its rows and the dishes its lines
    /// reference, so subtotals reflect current menu prices.
    pub fn into_domain(self, items: Vec<(OrderItem, DbDish)>) -> DomainOrder {
        DomainOrder {
            id: self.id,
            table_id: self.table_id,
            completed: self.completed,
            created_at: self.created_at,
            items: items
                .into_iter()
                .map(|(item, dish)| DomainOrderItem {
                    id: item.id,
                    dish: dish.into(),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}
