pub mod auth;
pub mod dining_table;
pub mod dish;
pub mod floor;
pub mod incident;
pub mod order;
pub mod reservation;
pub mod user;
