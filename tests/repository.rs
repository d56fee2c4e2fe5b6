use chrono::NaiveDate;

use comanda::domain::dining_table::{NewDiningTable, TableListQuery, TableState, UpdateDiningTable};
use comanda::domain::dish::{DishCategory, DishListQuery, NewDish, UpdateDish};
use comanda::domain::floor::{NewFloor, UpdateFloor};
use comanda::domain::incident::{IncidentCategory, IncidentListQuery, NewIncident, UpdateIncident};
use comanda::domain::order::OrderListQuery;
use comanda::domain::reservation::NewReservation;
use comanda::domain::user::{
    NewEmployee, NewEmployeeProfile, NewUser, UpdateEmployee, UserListQuery,
};
use comanda::repository::errors::RepositoryError;
use comanda::repository::{
    DieselRepository, DiningTableReader, DiningTableWriter, DishReader, DishWriter, FloorReader,
    FloorWriter, IncidentReader, IncidentWriter, OrderReader, OrderWriter, ReservationReader,
    ReservationWriter, UserReader, UserWriter,
};

mod common;

fn seed_table(repo: &DieselRepository, name: &str) -> i32 {
    let floor = repo
        .create_floor(&NewFloor::new(format!("Piso de {name}"), 0))
        .expect("floor created");
    let table = repo
        .create_table(&NewDiningTable::new(name, 4).with_floor_id(floor.id))
        .expect("table created");
    table.id
}

#[test]
fn test_floor_repository_crud() {
    let test_db = common::TestDb::new("test_floor_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let terrace = repo.create_floor(&NewFloor::new("Terraza", 2)).unwrap();
    let ground = repo.create_floor(&NewFloor::new("Planta baja", 1)).unwrap();

    // Ordered by position for display.
    let floors = repo.list_floors().unwrap();
    assert_eq!(floors.len(), 2);
    assert_eq!(floors[0].id, ground.id);

    let err = repo
        .create_floor(&NewFloor::new("Terraza", 9))
        .expect_err("duplicate floor name must fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let renamed = repo
        .update_floor(terrace.id, &UpdateFloor::new().name("Azotea"))
        .unwrap();
    assert_eq!(renamed.name, "Azotea");
    assert_eq!(renamed.position, 2);

    // An empty patch leaves the row untouched.
    let unchanged = repo.update_floor(terrace.id, &UpdateFloor::new()).unwrap();
    assert_eq!(unchanged.name, "Azotea");

    let table = repo
        .create_table(&NewDiningTable::new("T1", 4).with_floor_id(terrace.id))
        .unwrap();

    repo.delete_floor(terrace.id).unwrap();
    assert!(repo.get_floor_by_id(terrace.id).unwrap().is_none());

    // Tables survive their floor, detached.
    let orphan = repo.get_table_by_id(table.id).unwrap().expect("table kept");
    assert_eq!(orphan.floor_id, None);

    let err = repo
        .delete_floor(terrace.id)
        .expect_err("deleting twice must fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_table_repository_crud() {
    let test_db = common::TestDb::new("test_table_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let floor = repo.create_floor(&NewFloor::new("Salón", 0)).unwrap();

    let t1 = repo
        .create_table(&NewDiningTable::new("T1", 2).with_floor_id(floor.id))
        .unwrap();
    assert_eq!(t1.state, TableState::Free);

    repo.create_table(&NewDiningTable::new("T2", 6).with_floor_id(floor.id))
        .unwrap();

    let err = repo
        .create_table(&NewDiningTable::new("T1", 8).with_floor_id(floor.id))
        .expect_err("duplicate table name on the same floor must fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let (total, free_tables) = repo
        .list_tables(TableListQuery::new().floor_id(floor.id).state(TableState::Free))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(free_tables.len(), 2);

    let resized = repo
        .update_table(t1.id, &UpdateDiningTable::new().capacity(4))
        .unwrap();
    assert_eq!(resized.capacity, 4);
    assert_eq!(resized.name, "T1");

    let detached = repo
        .update_table(t1.id, &UpdateDiningTable::new().floor_id(None))
        .unwrap();
    assert_eq!(detached.floor_id, None);

    repo.delete_table(t1.id).unwrap();
    assert!(repo.get_table_by_id(t1.id).unwrap().is_none());
}

#[test]
fn test_dish_repository_crud() {
    let test_db = common::TestDb::new("test_dish_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let pizza = repo
        .create_dish(
            &NewDish::new("Pizza napolitana", 9000, DishCategory::Main)
                .with_description("masa madre"),
        )
        .unwrap();
    repo.create_dish(&NewDish::new("Pisco sour", 4500, DishCategory::Drink))
        .unwrap();

    let (total, drinks) = repo
        .list_dishes(DishListQuery::new().category(DishCategory::Drink))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(drinks[0].name, "Pisco sour");

    let (_, by_description) = repo
        .list_dishes(DishListQuery::new().search("masa"))
        .unwrap();
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].id, pizza.id);

    let repriced = repo
        .update_dish(pizza.id, &UpdateDish::new().price(9500))
        .unwrap();
    assert_eq!(repriced.price, 9500);
    assert_eq!(repriced.description.as_deref(), Some("masa madre"));

    let cleared = repo
        .update_dish(pizza.id, &UpdateDish::new().description(None::<String>))
        .unwrap();
    assert_eq!(cleared.description, None);

    repo.delete_dish(pizza.id).unwrap();
    assert!(repo.get_dish_by_id(pizza.id).unwrap().is_none());
}

#[test]
fn test_order_lifecycle_scenario() {
    let test_db = common::TestDb::new("test_order_lifecycle_scenario.db");
    let repo = DieselRepository::new(test_db.pool());

    let table_id = seed_table(&repo, "T1");
    let pizza = repo
        .create_dish(&NewDish::new("Pizza", 9000, DishCategory::Main))
        .unwrap();

    // Free -> Occupied with exactly one open order.
    let order = repo.start_order(table_id).unwrap();
    assert!(!order.completed);
    assert_eq!(order.table_id, table_id);
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Occupied);

    let err = repo
        .start_order(table_id)
        .expect_err("starting on an occupied table must fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    // Same dish twice collapses into one line.
    repo.add_dish(order.id, pizza.id).unwrap();
    let after_second = repo.add_dish(order.id, pizza.id).unwrap();
    assert_eq!(after_second.items.len(), 1);
    assert_eq!(after_second.items[0].quantity, 2);
    assert_eq!(after_second.total(), 18_000);

    let err = repo
        .add_dish(order.id, 9999)
        .expect_err("unknown dish must fail");
    assert!(matches!(err, RepositoryError::NotFound));

    // Totals always track the current menu price.
    repo.update_dish(pizza.id, &UpdateDish::new().price(10_000))
        .unwrap();
    let repriced = repo.get_order_by_id(order.id).unwrap().unwrap();
    assert_eq!(repriced.total(), 20_000);
    repo.update_dish(pizza.id, &UpdateDish::new().price(9000))
        .unwrap();

    // Removing decrements, then deletes the line at quantity one.
    let after_remove = repo.remove_dish(order.id, pizza.id).unwrap();
    assert_eq!(after_remove.items[0].quantity, 1);
    assert_eq!(after_remove.total(), 9000);

    let empty = repo.remove_dish(order.id, pizza.id).unwrap();
    assert!(empty.items.is_empty());

    let err = repo
        .remove_dish(order.id, pizza.id)
        .expect_err("removing an absent line must fail");
    assert!(matches!(err, RepositoryError::NotFound));

    repo.add_dish(order.id, pizza.id).unwrap();

    let finalized = repo.finalize_order(order.id).unwrap();
    assert!(finalized.completed);
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Free);

    let (completed_total, completed) = repo
        .list_orders(OrderListQuery::new().table_id(table_id).completed(true))
        .unwrap();
    assert_eq!(completed_total, 1);
    assert_eq!(completed[0].id, order.id);
}

#[test]
fn test_delete_open_order_frees_its_table() {
    let test_db = common::TestDb::new("test_delete_open_order_frees_its_table.db");
    let repo = DieselRepository::new(test_db.pool());

    let table_id = seed_table(&repo, "T1");

    // An open order holds the table; deleting it must not strand the
    // table in Occupied.
    let open = repo.start_order(table_id).unwrap();
    repo.delete_order(open.id).unwrap();
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Free);

    // Deleting a completed order leaves the room alone.
    let second = repo.start_order(table_id).unwrap();
    repo.finalize_order(second.id).unwrap();
    let third = repo.start_order(table_id).unwrap();
    repo.delete_order(second.id).unwrap();
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Occupied);
    assert!(repo.get_order_by_id(third.id).unwrap().is_some());
}

#[test]
fn test_set_table_state_rules() {
    let test_db = common::TestDb::new("test_set_table_state_rules.db");
    let repo = DieselRepository::new(test_db.pool());

    let table_id = seed_table(&repo, "T1");

    let order = repo.start_order(table_id).unwrap();

    // No forcing while a tab is open, not even to Free.
    let err = repo
        .set_table_state(table_id, TableState::Free)
        .expect_err("occupied tables cannot be forced");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    repo.finalize_order(order.id).unwrap();

    // Only Free and Maintenance are valid targets.
    let err = repo
        .set_table_state(table_id, TableState::Occupied)
        .expect_err("Occupied is not a valid target");
    assert!(matches!(err, RepositoryError::Conflict(_)));
    let err = repo
        .set_table_state(table_id, TableState::Reserved)
        .expect_err("Reserved is not a valid target");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let maintenance = repo
        .set_table_state(table_id, TableState::Maintenance)
        .unwrap();
    assert_eq!(maintenance.state, TableState::Maintenance);

    let err = repo
        .start_order(table_id)
        .expect_err("no orders on a table under maintenance");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let freed = repo.set_table_state(table_id, TableState::Free).unwrap();
    assert_eq!(freed.state, TableState::Free);
}

#[test]
fn test_reservation_drags_table_state() {
    let test_db = common::TestDb::new("test_reservation_drags_table_state.db");
    let repo = DieselRepository::new(test_db.pool());

    let table_id = seed_table(&repo, "T1");
    let when = NaiveDate::from_ymd_opt(2026, 9, 18)
        .and_then(|d| d.and_hms_opt(21, 0, 0))
        .unwrap();

    // Booking an occupied table is accepted; the walk-in wins the spot
    // and the table still flips to Reserved.
    let order = repo.start_order(table_id).unwrap();
    let reservation = repo
        .create_reservation(&NewReservation::new(table_id, "Rojas", when, 2))
        .unwrap();
    assert_eq!(reservation.table_id, Some(table_id));
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Reserved);

    // Finalizing the open order frees the table regardless of the hold.
    repo.finalize_order(order.id).unwrap();
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Free);

    repo.delete_reservation(reservation.id).unwrap();
    assert!(repo.get_reservation_by_id(reservation.id).unwrap().is_none());
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Free);

    let err = repo
        .create_reservation(&NewReservation::new(9999, "Nadie", when, 2))
        .expect_err("reserving a missing table must fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_order_line_resource_crud() {
    let test_db = common::TestDb::new("test_order_line_resource_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let table_id = seed_table(&repo, "T1");
    let pizza = repo
        .create_dish(&NewDish::new("Pizza", 9000, DishCategory::Main))
        .unwrap();
    let sour = repo
        .create_dish(&NewDish::new("Pisco sour", 4500, DishCategory::Drink))
        .unwrap();
    let order = repo.start_order(table_id).unwrap();

    let line = repo.create_line(order.id, pizza.id, 2).unwrap();
    assert_eq!(line.quantity, 2);
    repo.create_line(order.id, sour.id, 1).unwrap();

    let err = repo
        .create_line(order.id, pizza.id, 1)
        .expect_err("one line per (order, dish) pair");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let err = repo
        .create_line(order.id, 9999, 1)
        .expect_err("unknown dish must fail");
    assert!(matches!(err, RepositoryError::NotFound));

    let lines = repo.list_lines(Some(order.id)).unwrap();
    assert_eq!(lines.len(), 2);

    let bumped = repo.set_line_quantity(line.id, 3).unwrap();
    assert_eq!(bumped.quantity, 3);

    let full_order = repo.get_order_by_id(order.id).unwrap().unwrap();
    assert_eq!(full_order.total(), 3 * 9000 + 4500);

    repo.delete_line(line.id).unwrap();
    assert!(repo.get_line_by_id(line.id).unwrap().is_none());

    let err = repo
        .delete_line(line.id)
        .expect_err("deleting twice must fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_incident_repository_crud() {
    let test_db = common::TestDb::new("test_incident_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let complaint = repo
        .create_incident(&NewIncident::new(
            IncidentCategory::Complaint,
            "la mesa 4 cojea",
        ))
        .unwrap();
    assert!(!complaint.seen);

    repo.create_incident(&NewIncident::new(
        IncidentCategory::Suggestion,
        "más hielo en la barra",
    ))
    .unwrap();

    let (unseen_total, unseen) = repo
        .list_incidents(IncidentListQuery::new().seen(false))
        .unwrap();
    assert_eq!(unseen_total, 2);
    assert_eq!(unseen.len(), 2);

    let acknowledged = repo.mark_seen(complaint.id).unwrap();
    assert!(acknowledged.seen);

    let (unseen_total, _) = repo
        .list_incidents(IncidentListQuery::new().seen(false))
        .unwrap();
    assert_eq!(unseen_total, 1);

    let edited = repo
        .update_incident(
            complaint.id,
            &UpdateIncident::new().message("la mesa 4 sigue cojeando"),
        )
        .unwrap();
    assert_eq!(edited.message, "la mesa 4 sigue cojeando");
    assert_eq!(edited.category, IncidentCategory::Complaint);

    repo.delete_incident(complaint.id).unwrap();
    assert!(repo.get_incident_by_id(complaint.id).unwrap().is_none());
}

#[test]
fn test_employee_repository_crud() {
    let test_db = common::TestDb::new("test_employee_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let birth_date = NaiveDate::from_ymd_opt(1990, 4, 12).unwrap();

    let pedro = repo
        .create_employee(
            &NewEmployee::new(NewUser::new("Pedro@Example.com", "Pedro", "$argon2$h1"))
                .with_profile(NewEmployeeProfile::new("12.345.678-9", birth_date, "Chilena")),
        )
        .unwrap();
    assert_eq!(pedro.user.email, "pedro@example.com");
    assert!(pedro.profile.is_some());

    let boss = repo
        .create_employee(&NewEmployee::new(
            NewUser::new("boss@example.com", "Boss", "$argon2$h2").admin(),
        ))
        .unwrap();
    assert!(boss.user.is_admin);
    assert!(boss.profile.is_none());

    let err = repo
        .create_employee(&NewEmployee::new(NewUser::new(
            "pedro@example.com",
            "Otro",
            "$argon2$h3",
        )))
        .expect_err("duplicate email must fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let found = repo
        .get_user_by_email("pedro@example.com")
        .unwrap()
        .expect("account exists");
    assert_eq!(found.id, pedro.user.id);

    let (_, matches) = repo
        .list_employees(UserListQuery::new().search("pedro"))
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0]
            .profile
            .as_ref()
            .map(|profile| profile.nationality.as_str()),
        Some("Chilena")
    );

    let updated = repo
        .update_employee(
            pedro.user.id,
            &UpdateEmployee::new()
                .name("Pedro Pérez")
                .profile(NewEmployeeProfile::new("12.345.678-9", birth_date, "Peruana")),
        )
        .unwrap();
    assert_eq!(updated.user.name, "Pedro Pérez");
    assert_eq!(
        updated.profile.map(|profile| profile.nationality),
        Some("Peruana".to_string())
    );

    repo.delete_user(pedro.user.id).unwrap();
    assert!(repo.get_user_by_id(pedro.user.id).unwrap().is_none());
    let (total, _) = repo.list_employees(UserListQuery::new()).unwrap();
    assert_eq!(total, 1);
}
