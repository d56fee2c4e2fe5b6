use mockall::mock;

use super::{
    DiningTableReader, DiningTableWriter, DishReader, DishWriter, FloorReader, FloorWriter,
    IncidentReader, IncidentWriter, OrderReader, OrderWriter, ReservationReader,
    ReservationWriter, UserReader, UserWriter,
};
use crate::domain::{
    dining_table::{DiningTable, NewDiningTable, TableListQuery, TableState, UpdateDiningTable},
    dish::{Dish, DishListQuery, NewDish, UpdateDish},
    floor::{Floor, NewFloor, UpdateFloor},
    incident::{Incident, IncidentListQuery, NewIncident, UpdateIncident},
    order::{Order, OrderLine, OrderListQuery, UpdateOrder},
    reservation::{NewReservation, Reservation, ReservationListQuery, UpdateReservation},
    user::{Employee, NewEmployee, UpdateEmployee, User, UserListQuery},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub FloorReader {}

    impl FloorReader for FloorReader {
        fn get_floor_by_id(&self, id: i32) -> RepositoryResult<Option<Floor>>;
        fn list_floors(&self) -> RepositoryResult<Vec<Floor>>;
    }
}

mock! {
    pub FloorWriter {}

    impl FloorWriter for FloorWriter {
        fn create_floor(&self, new_floor: &NewFloor) -> RepositoryResult<Floor>;
        fn update_floor(&self, floor_id: i32, updates: &UpdateFloor) -> RepositoryResult<Floor>;
        fn delete_floor(&self, floor_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub DiningTableReader {}

    impl DiningTableReader for DiningTableReader {
        fn get_table_by_id(&self, id: i32) -> RepositoryResult<Option<DiningTable>>;
        fn list_tables(&self, query: TableListQuery) -> RepositoryResult<(usize, Vec<DiningTable>)>;
    }
}

mock! {
    pub DiningTableWriter {}

    impl DiningTableWriter for DiningTableWriter {
        fn create_table(&self, new_table: &NewDiningTable) -> RepositoryResult<DiningTable>;
        fn update_table(&self, table_id: i32, updates: &UpdateDiningTable) -> RepositoryResult<DiningTable>;
        fn delete_table(&self, table_id: i32) -> RepositoryResult<()>;
        fn set_table_state(&self, table_id: i32, target: TableState) -> RepositoryResult<DiningTable>;
    }
}

mock! {
    pub DishReader {}

    impl DishReader for DishReader {
        fn get_dish_by_id(&self, id: i32) -> RepositoryResult<Option<Dish>>;
        fn list_dishes(&self, query: DishListQuery) -> RepositoryResult<(usize, Vec<Dish>)>;
    }
}

mock! {
    pub DishWriter {}

    impl DishWriter for DishWriter {
        fn create_dish(&self, new_dish: &NewDish) -> RepositoryResult<Dish>;
        fn update_dish(&self, dish_id: i32, updates: &UpdateDish) -> RepositoryResult<Dish>;
        fn delete_dish(&self, dish_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
        fn get_line_by_id(&self, line_id: i32) -> RepositoryResult<Option<OrderLine>>;
        fn list_lines(&self, order_id: Option<i32>) -> RepositoryResult<Vec<OrderLine>>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn start_order(&self, table_id: i32) -> RepositoryResult<Order>;
        fn add_dish(&self, order_id: i32, dish_id: i32) -> RepositoryResult<Order>;
        fn remove_dish(&self, order_id: i32, dish_id: i32) -> RepositoryResult<Order>;
        fn finalize_order(&self, order_id: i32) -> RepositoryResult<Order>;
        fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
        fn delete_order(&self, order_id: i32) -> RepositoryResult<()>;
        fn create_line(&self, order_id: i32, dish_id: i32, quantity: i32) -> RepositoryResult<OrderLine>;
        fn set_line_quantity(&self, line_id: i32, quantity: i32) -> RepositoryResult<OrderLine>;
        fn delete_line(&self, line_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ReservationReader {}

    impl ReservationReader for ReservationReader {
        fn get_reservation_by_id(&self, id: i32) -> RepositoryResult<Option<Reservation>>;
        fn list_reservations(&self, query: ReservationListQuery) -> RepositoryResult<(usize, Vec<Reservation>)>;
    }
}

mock! {
    pub ReservationWriter {}

    impl ReservationWriter for ReservationWriter {
        fn create_reservation(&self, new_reservation: &NewReservation) -> RepositoryResult<Reservation>;
        fn update_reservation(&self, reservation_id: i32, updates: &UpdateReservation) -> RepositoryResult<Reservation>;
        fn delete_reservation(&self, reservation_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub IncidentReader {}

    impl IncidentReader for IncidentReader {
        fn get_incident_by_id(&self, id: i32) -> RepositoryResult<Option<Incident>>;
        fn list_incidents(&self, query: IncidentListQuery) -> RepositoryResult<(usize, Vec<Incident>)>;
    }
}

mock! {
    pub IncidentWriter {}

    impl IncidentWriter for IncidentWriter {
        fn create_incident(&self, new_incident: &NewIncident) -> RepositoryResult<Incident>;
        fn update_incident(&self, incident_id: i32, updates: &UpdateIncident) -> RepositoryResult<Incident>;
        fn delete_incident(&self, incident_id: i32) -> RepositoryResult<()>;
        fn mark_seen(&self, incident_id: i32) -> RepositoryResult<Incident>;
    }
}

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn list_employees(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<Employee>)>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
        fn update_employee(&self, user_id: i32, updates: &UpdateEmployee) -> RepositoryResult<Employee>;
        fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
    }
}
