use chrono::NaiveDate;

use comanda::domain::auth::AuthenticatedUser;
use comanda::domain::dining_table::TableState;
use comanda::forms::auth::LoginForm;
use comanda::forms::dish::AddDishForm;
use comanda::forms::employee::AddEmployeeForm;
use comanda::forms::floor::AddFloorForm;
use comanda::forms::order::DishLineForm;
use comanda::forms::reservation::AddReservationForm;
use comanda::forms::table::{AddTableForm, SetTableStateForm};
use comanda::repository::{DieselRepository, DiningTableReader};
use comanda::services::{
    ServiceError, auth, dishes, employees, floors, orders, reservations, tables,
};

mod common;

fn admin() -> AuthenticatedUser {
    AuthenticatedUser {
        id: 1,
        email: "boss@example.com".to_string(),
        name: "Boss".to_string(),
        is_admin: true,
    }
}

fn waiter() -> AuthenticatedUser {
    AuthenticatedUser {
        id: 7,
        email: "waiter@example.com".to_string(),
        name: "Waiter".to_string(),
        is_admin: false,
    }
}

fn seed_table(repo: &DieselRepository) -> i32 {
    let floor = floors::create_floor(
        repo,
        &admin(),
        AddFloorForm {
            name: "Salón".to_string(),
            position: 0,
        },
    )
    .expect("floor created");

    let table = tables::create_table(
        repo,
        &admin(),
        AddTableForm {
            name: "T1".to_string(),
            capacity: 4,
            floor_id: Some(floor.id),
        },
    )
    .expect("table created");

    table.id
}

#[test]
fn service_order_lifecycle_runs_end_to_end() {
    let test_db = common::TestDb::new("service_order_lifecycle_runs_end_to_end.db");
    let repo = DieselRepository::new(test_db.pool());

    let table_id = seed_table(&repo);
    let pizza = dishes::create_dish(
        &repo,
        &admin(),
        AddDishForm {
            name: "Pizza".to_string(),
            description: None,
            price: 9000,
            category: "Main".to_string(),
            image: None,
        },
    )
    .expect("dish created");

    let order = tables::start_table_order(&repo, &waiter(), table_id).expect("order started");
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Occupied);

    orders::add_dish_line(&repo, &waiter(), order.id, DishLineForm { plato_id: pizza.id })
        .expect("first unit added");
    let with_two = orders::add_dish_line(
        &repo,
        &waiter(),
        order.id,
        DishLineForm { plato_id: pizza.id },
    )
    .expect("second unit added");
    assert_eq!(with_two.items.len(), 1);
    assert_eq!(with_two.items[0].quantity, 2);
    assert_eq!(with_two.total(), 18_000);

    let finalized = orders::finalize_order(&repo, &waiter(), order.id).expect("order finalized");
    assert!(finalized.completed);
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Free);
}

#[test]
fn service_start_order_rejects_busy_table() {
    let test_db = common::TestDb::new("service_start_order_rejects_busy_table.db");
    let repo = DieselRepository::new(test_db.pool());

    let table_id = seed_table(&repo);
    tables::start_table_order(&repo, &waiter(), table_id).expect("order started");

    let result = tables::start_table_order(&repo, &waiter(), table_id);
    assert!(matches!(result, Err(ServiceError::Conflict(_))));
}

#[test]
fn service_admin_gates_hold_against_real_repository() {
    let test_db = common::TestDb::new("service_admin_gates_hold.db");
    let repo = DieselRepository::new(test_db.pool());

    let table_id = seed_table(&repo);

    let result = dishes::create_dish(
        &repo,
        &waiter(),
        AddDishForm {
            name: "Pizza".to_string(),
            description: None,
            price: 9000,
            category: "Main".to_string(),
            image: None,
        },
    );
    assert!(matches!(result, Err(ServiceError::Forbidden)));

    let result = tables::force_table_state(
        &repo,
        &waiter(),
        table_id,
        SetTableStateForm {
            estado: "Maintenance".to_string(),
        },
    );
    assert!(matches!(result, Err(ServiceError::Forbidden)));

    let forced = tables::force_table_state(
        &repo,
        &admin(),
        table_id,
        SetTableStateForm {
            estado: "Maintenance".to_string(),
        },
    )
    .expect("admin may force the state");
    assert_eq!(forced.state, TableState::Maintenance);
}

#[test]
fn service_reservation_books_whatever_the_state() {
    let test_db = common::TestDb::new("service_reservation_books_whatever_the_state.db");
    let repo = DieselRepository::new(test_db.pool());

    let table_id = seed_table(&repo);
    tables::start_table_order(&repo, &waiter(), table_id).expect("order started");

    let when = NaiveDate::from_ymd_opt(2026, 9, 18)
        .and_then(|d| d.and_hms_opt(21, 0, 0))
        .unwrap();
    let form = |client_name: &str| AddReservationForm {
        table_id,
        client_name: client_name.to_string(),
        reserved_for: when,
        party_size: 2,
        notes: None,
    };

    assert!(matches!(
        reservations::create_reservation(&repo, &waiter(), form("Rojas")),
        Err(ServiceError::Forbidden)
    ));

    let reservation = reservations::create_reservation(&repo, &admin(), form("Rojas"))
        .expect("reservation created");
    assert_eq!(reservation.table_id, Some(table_id));
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Reserved);

    reservations::remove_reservation(&repo, &admin(), reservation.id).expect("hold released");
    let table = repo.get_table_by_id(table_id).unwrap().unwrap();
    assert_eq!(table.state, TableState::Free);
}

#[test]
fn service_created_employee_can_log_in() {
    let test_db = common::TestDb::new("service_created_employee_can_log_in.db");
    let repo = DieselRepository::new(test_db.pool());

    let employee = employees::create_employee(
        &repo,
        &admin(),
        AddEmployeeForm {
            email: "Pedro@Example.com".to_string(),
            name: "Pedro".to_string(),
            password: "muy-secreta".to_string(),
            is_admin: false,
            national_id: Some("12.345.678-9".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            nationality: Some("Chilena".to_string()),
        },
    )
    .expect("employee created");
    assert_eq!(employee.user.email, "pedro@example.com");
    assert!(employee.profile.is_some());

    let session = auth::login(
        &repo,
        LoginForm {
            email: "pedro@example.com".to_string(),
            password: "muy-secreta".to_string(),
        },
    )
    .expect("login succeeds");
    assert_eq!(session.id, employee.user.id);
    assert!(!session.is_admin);

    let result = auth::login(
        &repo,
        LoginForm {
            email: "pedro@example.com".to_string(),
            password: "equivocada".to_string(),
        },
    );
    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}

#[test]
fn service_admin_cannot_delete_own_account() {
    let test_db = common::TestDb::new("service_admin_cannot_delete_own_account.db");
    let repo = DieselRepository::new(test_db.pool());

    let boss = admin();
    let result = employees::remove_employee(&repo, &boss, boss.id);
    assert!(matches!(result, Err(ServiceError::Conflict(_))));
}
