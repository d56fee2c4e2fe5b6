use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::dining_table::TableState,
    domain::order::{
        Order as DomainOrder, OrderLine as DomainOrderLine, OrderListQuery,
        UpdateOrder as DomainUpdateOrder,
    },
    models::dish::Dish as DbDish,
    models::order::{
        NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
        OrderItem as DbOrderItem,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, OrderReader, OrderWriter},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let order_id = order.id;
        let mut items = load_items_for_orders(&mut conn, &[order_id])?;

        Ok(Some(
            order.into_domain(items.remove(&order_id).unwrap_or_default()),
        ))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<DomainOrder>)> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let OrderListQuery {
            table_id,
            completed,
            pagination,
        } = query;

        let mut count_query = orders::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(table) = table_id {
            count_query = count_query.filter(orders::table_id.eq(table));
        }
        if let Some(completed) = completed {
            count_query = count_query.filter(orders::completed.eq(completed));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = orders::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(table) = table_id {
            items = items.filter(orders::table_id.eq(table));
        }
        if let Some(completed) = completed {
            items = items.filter(orders::completed.eq(completed));
        }

        items = items.order(orders::created_at.desc());

        if let Some(pagination) = pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let db_orders = items.load::<DbOrder>(&mut conn)?;
        if db_orders.is_empty() {
            return Ok((total, Vec::new()));
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();
        let mut items_by_order = load_items_for_orders(&mut conn, &order_ids)?;

        let orders = db_orders
            .into_iter()
            .map(|order| {
                let order_id = order.id;
                order.into_domain(items_by_order.remove(&order_id).unwrap_or_default())
            })
            .collect();

        Ok((total, orders))
    }

    fn get_line_by_id(&self, line_id: i32) -> RepositoryResult<Option<DomainOrderLine>> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;
        let line = order_items::table
            .filter(order_items::id.eq(line_id))
            .first::<DbOrderItem>(&mut conn)
            .optional()?;

        Ok(line.map(Into::into))
    }

    fn list_lines(&self, order_id: Option<i32>) -> RepositoryResult<Vec<DomainOrderLine>> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;

        let mut query = order_items::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(order_id) = order_id {
            query = query.filter(order_items::order_id.eq(order_id));
        }

        let lines = query
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        Ok(lines.into_iter().map(Into::into).collect())
    }
}

impl OrderWriter for DieselRepository {
    fn start_order(&self, table_id: i32) -> RepositoryResult<DomainOrder> {
        use crate::schema::{dining_tables, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let table = dining_tables::table
                .filter(dining_tables::id.eq(table_id))
                .first::<crate::models::dining_table::DiningTable>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            if TableState::from(table.state.as_str()) != TableState::Free {
                return Err(RepositoryError::Conflict(
                    "table is not free".to_string(),
                ));
            }

            let created = diesel::insert_into(orders::table)
                .values(&DbNewOrder {
                    table_id,
                    completed: false,
                })
                .get_result::<DbOrder>(conn)?;

            diesel::update(dining_tables::table.filter(dining_tables::id.eq(table_id)))
                .set(dining_tables::state.eq(<&str>::from(TableState::Occupied)))
                .execute(conn)?;

            Ok(created.into_domain(Vec::new()))
        })
    }

    fn add_dish(&self, order_id: i32, dish_id: i32) -> RepositoryResult<DomainOrder> {
        use crate::schema::{dishes, order_items, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let order = orders::table
                .filter(orders::id.eq(order_id))
                .first::<DbOrder>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let dish_exists = dishes::table
                .filter(dishes::id.eq(dish_id))
                .count()
                .get_result::<i64>(conn)?
                > 0;
            if !dish_exists {
                return Err(RepositoryError::NotFound);
            }

            let existing = order_items::table
                .filter(order_items::order_id.eq(order_id))
                .filter(order_items::dish_id.eq(dish_id))
                .first::<DbOrderItem>(conn)
                .optional()?;

            match existing {
                Some(line) => {
                    diesel::update(order_items::table.filter(order_items::id.eq(line.id)))
                        .set(order_items::quantity.eq(line.quantity + 1))
                        .execute(conn)?;
                }
                None => {
                    diesel::insert_into(order_items::table)
                        .values(&DbNewOrderItem {
                            order_id,
                            dish_id,
                            quantity: 1,
                        })
                        .execute(conn)?;
                }
            }

            let mut items = load_items_for_orders(conn, &[order_id])?;
            Ok(order.into_domain(items.remove(&order_id).unwrap_or_default()))
        })
    }

    fn remove_dish(&self, order_id: i32, dish_id: i32) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let order = orders::table
                .filter(orders::id.eq(order_id))
                .first::<DbOrder>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let line = order_items::table
                .filter(order_items::order_id.eq(order_id))
                .filter(order_items::dish_id.eq(dish_id))
                .first::<DbOrderItem>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            if line.quantity > 1 {
                diesel::update(order_items::table.filter(order_items::id.eq(line.id)))
                    .set(order_items::quantity.eq(line.quantity - 1))
                    .execute(conn)?;
            } else {
                diesel::delete(order_items::table.filter(order_items::id.eq(line.id)))
                    .execute(conn)?;
            }

            let mut items = load_items_for_orders(conn, &[order_id])?;
            Ok(order.into_domain(items.remove(&order_id).unwrap_or_default()))
        })
    }

    fn finalize_order(&self, order_id: i32) -> RepositoryResult<DomainOrder> {
        use crate::schema::{dining_tables, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
                .set(orders::completed.eq(true))
                .get_result::<DbOrder>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            // The table goes back to Free no matter what state it is in;
            // pending reservations are not reconciled here.
            diesel::update(dining_tables::table.filter(dining_tables::id.eq(updated.table_id)))
                .set(dining_tables::state.eq(<&str>::from(TableState::Free)))
                .execute(conn)?;

            let order_id = updated.id;
            let mut items = load_items_for_orders(conn, &[order_id])?;
            Ok(updated.into_domain(items.remove(&order_id).unwrap_or_default()))
        })
    }

    fn update_order(
        &self,
        order_id: i32,
        updates: &DomainUpdateOrder,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let updated = match updates.completed {
            Some(completed) => diesel::update(orders::table.filter(orders::id.eq(order_id)))
                .set(orders::completed.eq(completed))
                .get_result::<DbOrder>(&mut conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?,
            None => orders::table
                .filter(orders::id.eq(order_id))
                .first::<DbOrder>(&mut conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?,
        };

        let order_id = updated.id;
        let mut items = load_items_for_orders(&mut conn, &[order_id])?;
        Ok(updated.into_domain(items.remove(&order_id).unwrap_or_default()))
    }

    fn delete_order(&self, order_id: i32) -> RepositoryResult<()> {
        use crate::schema::{dining_tables, orders};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let order = orders::table
                .filter(orders::id.eq(order_id))
                .first::<DbOrder>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            diesel::delete(orders::table.filter(orders::id.eq(order_id))).execute(conn)?;

            // Deleting an open order would otherwise strand its table in
            // Occupied with no order left to finalize.
            if !order.completed {
                diesel::update(
                    dining_tables::table.filter(dining_tables::id.eq(order.table_id)),
                )
                .set(dining_tables::state.eq(<&str>::from(TableState::Free)))
                .execute(conn)?;
            }

            Ok(())
        })
    }

    fn create_line(
        &self,
        order_id: i32,
        dish_id: i32,
        quantity: i32,
    ) -> RepositoryResult<DomainOrderLine> {
        use crate::schema::{dishes, order_items, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrderLine, RepositoryError, _>(|conn| {
            let order_exists = orders::table
                .filter(orders::id.eq(order_id))
                .count()
                .get_result::<i64>(conn)?
                > 0;
            let dish_exists = dishes::table
                .filter(dishes::id.eq(dish_id))
                .count()
                .get_result::<i64>(conn)?
                > 0;
            if !order_exists || !dish_exists {
                return Err(RepositoryError::NotFound);
            }

            let created = diesel::insert_into(order_items::table)
                .values(&DbNewOrderItem {
                    order_id,
                    dish_id,
                    quantity,
                })
                .get_result::<DbOrderItem>(conn)?;

            Ok(created.into())
        })
    }

    fn set_line_quantity(&self, line_id: i32, quantity: i32) -> RepositoryResult<DomainOrderLine> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;

        let updated = diesel::update(order_items::table.filter(order_items::id.eq(line_id)))
            .set(order_items::quantity.eq(quantity))
            .get_result::<DbOrderItem>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.into())
    }

    fn delete_line(&self, line_id: i32) -> RepositoryResult<()> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(order_items::table.filter(order_items::id.eq(line_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Load order lines joined to their dishes, grouped by order id. The
/// join against the live menu is what keeps totals current.
fn load_items_for_orders(
    conn: &mut SqliteConnection,
    order_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<(DbOrderItem, DbDish)>>> {
    use crate::schema::{dishes, order_items};

    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = order_items::table
        .inner_join(dishes::table)
        .filter(order_items::order_id.eq_any(order_ids))
        .order(order_items::id.asc())
        .load::<(DbOrderItem, DbDish)>(conn)?;

    let mut map: HashMap<i32, Vec<(DbOrderItem, DbDish)>> = HashMap::new();
    for (item, dish) in rows {
        map.entry(item.order_id).or_default().push((item, dish));
    }

    Ok(map)
}
