use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::dish::Dish;
use crate::pagination::Pagination;

/// The running tab for one occupation episode of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    /// Owning table; the order is deleted with it.
    pub table_id: i32,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    /// Line items, one per dish.
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of the line subtotals against current menu prices.
    /// Derived on every read, never stored.
    pub fn total(&self) -> i64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

/// A (dish, quantity) pair within an order. The dish is embedded so
/// subtotals always reflect the current menu price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i32,
    pub dish: Dish,
    pub quantity: i32,
}

impl OrderItem {
    pub fn subtotal(&self) -> i64 {
        i64::from(self.dish.price) * i64::from(self.quantity)
    }
}

/// A line item exposed as its own resource, with raw foreign keys
/// instead of the embedded dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i32,
    pub order_id: i32,
    pub dish_id: i32,
    pub quantity: i32,
}

/// Patch data applied when updating an order through the plain resource
/// API. Lifecycle operations (start, finalize, line edits) do not use
/// this path.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrder {
    pub completed: Option<bool>,
}

impl UpdateOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub table_id: Option<i32>,
    pub completed: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_id(mut self, table_id: i32) -> Self {
        self.table_id = Some(table_id);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
