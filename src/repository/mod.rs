use crate::db::{DbConnection, DbPool};
use crate::domain::dining_table::{
    DiningTable, NewDiningTable, TableListQuery, TableState, UpdateDiningTable,
};
use crate::domain::dish::{Dish, DishListQuery, NewDish, UpdateDish};
use crate::domain::floor::{Floor, NewFloor, UpdateFloor};
use crate::domain::incident::{Incident, IncidentListQuery, NewIncident, UpdateIncident};
use crate::domain::order::{Order, OrderLine, OrderListQuery, UpdateOrder};
use crate::domain::reservation::{
    NewReservation, Reservation, ReservationListQuery, UpdateReservation,
};
use crate::domain::user::{Employee, NewEmployee, UpdateEmployee, User, UserListQuery};
use crate::repository::errors::RepositoryResult;

pub mod errors;

mod dining_table;
mod dish;
mod floor;
mod incident;
mod order;
mod reservation;
mod user;

#[cfg(test)]
pub mod mock;

/// Diesel-backed repository implementation that wraps an r2d2 pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over floors.
pub trait FloorReader {
    fn get_floor_by_id(&self, id: i32) -> RepositoryResult<Option<Floor>>;
    fn list_floors(&self) -> RepositoryResult<Vec<Floor>>;
}

/// Write operations over floors.
pub trait FloorWriter {
    fn create_floor(&self, new_floor: &NewFloor) -> RepositoryResult<Floor>;
    fn update_floor(&self, floor_id: i32, updates: &UpdateFloor) -> RepositoryResult<Floor>;
    /// Tables on the floor survive with their floor reference cleared.
    fn delete_floor(&self, floor_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over tables.
pub trait DiningTableReader {
    fn get_table_by_id(&self, id: i32) -> RepositoryResult<Option<DiningTable>>;
    fn list_tables(&self, query: TableListQuery) -> RepositoryResult<(usize, Vec<DiningTable>)>;
}

/// Write operations over tables, including the occupancy lifecycle.
pub trait DiningTableWriter {
    fn create_table(&self, new_table: &NewDiningTable) -> RepositoryResult<DiningTable>;
    fn update_table(
        &self,
        table_id: i32,
        updates: &UpdateDiningTable,
    ) -> RepositoryResult<DiningTable>;
    fn delete_table(&self, table_id: i32) -> RepositoryResult<()>;
    /// Force a table to `Free` or `Maintenance`. Rejected while the
    /// table is `Occupied` or for any other target state.
    fn set_table_state(&self, table_id: i32, target: TableState) -> RepositoryResult<DiningTable>;
}

/// Read-only operations over the menu.
pub trait DishReader {
    fn get_dish_by_id(&self, id: i32) -> RepositoryResult<Option<Dish>>;
    fn list_dishes(&self, query: DishListQuery) -> RepositoryResult<(usize, Vec<Dish>)>;
}

/// Write operations over the menu.
pub trait DishWriter {
    fn create_dish(&self, new_dish: &NewDish) -> RepositoryResult<Dish>;
    fn update_dish(&self, dish_id: i32, updates: &UpdateDish) -> RepositoryResult<Dish>;
    fn delete_dish(&self, dish_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over orders.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    fn get_line_by_id(&self, line_id: i32) -> RepositoryResult<Option<OrderLine>>;
    fn list_lines(&self, order_id: Option<i32>) -> RepositoryResult<Vec<OrderLine>>;
}

/// Write operations over orders. Every lifecycle step runs as a single
/// transaction so concurrent requests cannot interleave between the
/// state check and the write.
pub trait OrderWriter {
    /// Open a tab on a `Free` table and mark it `Occupied`.
    fn start_order(&self, table_id: i32) -> RepositoryResult<Order>;
    /// Increment the (order, dish) line, creating it at quantity 1.
    fn add_dish(&self, order_id: i32, dish_id: i32) -> RepositoryResult<Order>;
    /// Decrement the (order, dish) line, deleting it at quantity 1.
    fn remove_dish(&self, order_id: i32, dish_id: i32) -> RepositoryResult<Order>;
    /// Complete the order and free its table unconditionally.
    fn finalize_order(&self, order_id: i32) -> RepositoryResult<Order>;
    fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
    /// Delete an order. When the order was still open its table goes
    /// back to `Free`, since no order remains to finalize.
    fn delete_order(&self, order_id: i32) -> RepositoryResult<()>;
    /// Insert a line directly with an explicit quantity. `Conflict` when
    /// the (order, dish) pair already has a line.
    fn create_line(&self, order_id: i32, dish_id: i32, quantity: i32)
    -> RepositoryResult<OrderLine>;
    fn set_line_quantity(&self, line_id: i32, quantity: i32) -> RepositoryResult<OrderLine>;
    fn delete_line(&self, line_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over reservations.
pub trait ReservationReader {
    fn get_reservation_by_id(&self, id: i32) -> RepositoryResult<Option<Reservation>>;
    fn list_reservations(
        &self,
        query: ReservationListQuery,
    ) -> RepositoryResult<(usize, Vec<Reservation>)>;
}

/// Write operations over reservations, which drag the target table's
/// state along with them.
pub trait ReservationWriter {
    /// Insert the reservation and mark the table `Reserved`. The
    /// table's current state is deliberately not checked.
    fn create_reservation(&self, new_reservation: &NewReservation)
    -> RepositoryResult<Reservation>;
    fn update_reservation(
        &self,
        reservation_id: i32,
        updates: &UpdateReservation,
    ) -> RepositoryResult<Reservation>;
    /// Delete the reservation and set its table (if still present) back
    /// to `Free`, even if other reservations target the same table.
    fn delete_reservation(&self, reservation_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over incidents.
pub trait IncidentReader {
    fn get_incident_by_id(&self, id: i32) -> RepositoryResult<Option<Incident>>;
    fn list_incidents(&self, query: IncidentListQuery)
    -> RepositoryResult<(usize, Vec<Incident>)>;
}

/// Write operations over incidents.
pub trait IncidentWriter {
    fn create_incident(&self, new_incident: &NewIncident) -> RepositoryResult<Incident>;
    fn update_incident(
        &self,
        incident_id: i32,
        updates: &UpdateIncident,
    ) -> RepositoryResult<Incident>;
    fn delete_incident(&self, incident_id: i32) -> RepositoryResult<()>;
    fn mark_seen(&self, incident_id: i32) -> RepositoryResult<Incident>;
}

/// Read-only operations over staff accounts and their profiles.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    fn list_employees(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<Employee>)>;
}

/// Write operations over staff accounts and their profiles.
pub trait UserWriter {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
    fn update_employee(&self, user_id: i32, updates: &UpdateEmployee)
    -> RepositoryResult<Employee>;
    fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
}
