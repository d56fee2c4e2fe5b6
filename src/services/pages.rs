use crate::domain::auth::AuthenticatedUser;
use crate::domain::dining_table::{DiningTable, TableListQuery};
use crate::domain::dish::{Dish, DishCategory, DishListQuery};
use crate::domain::floor::Floor;
use crate::domain::incident::{Incident, IncidentListQuery};
use crate::domain::order::{Order, OrderListQuery};
use crate::domain::reservation::{Reservation, ReservationListQuery};
use crate::domain::user::Employee;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    DiningTableReader, DishReader, FloorReader, IncidentReader, OrderReader, ReservationReader,
    UserReader,
};
use crate::services::employees::{self, EmployeeListParams};
use crate::services::{ServiceError, ServiceResult, total_pages};

/// Data for the floor-plan dashboard any staff member sees.
pub struct DashboardData {
    pub floors: Vec<Floor>,
    pub tables: Vec<DiningTable>,
    pub open_orders: Vec<Order>,
}

/// Extra panels shown to admins on top of the dashboard.
pub struct AdminDashboardData {
    pub dashboard: DashboardData,
    pub unseen_incidents: Vec<Incident>,
    pub reservations: Vec<Reservation>,
}

/// Completed-order history, newest first.
pub struct HistoryData {
    pub orders: Paginated<Order>,
}

/// Data for the floors/tables/staff administration page.
pub struct RestaurantData {
    pub floors: Vec<Floor>,
    pub tables: Vec<DiningTable>,
    pub employees: Paginated<Employee>,
}

/// The menu grouped by section for the menu page.
pub struct MenuData {
    pub starters: Vec<Dish>,
    pub mains: Vec<Dish>,
    pub desserts: Vec<Dish>,
    pub drinks: Vec<Dish>,
}

/// Load the floor plan with its open orders. Requires only an
/// authenticated session.
pub fn load_dashboard<R>(repo: &R, _user: &AuthenticatedUser) -> ServiceResult<DashboardData>
where
    R: FloorReader + DiningTableReader + OrderReader + ?Sized,
{
    let floors = repo.list_floors()?;
    let (_, tables) = repo.list_tables(TableListQuery::new())?;
    let (_, open_orders) = repo.list_orders(OrderListQuery::new().completed(false))?;

    Ok(DashboardData {
        floors,
        tables,
        open_orders,
    })
}

/// Load the admin dashboard with the incident and reservation panels.
pub fn load_admin_dashboard<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<AdminDashboardData>
where
    R: FloorReader + DiningTableReader + OrderReader + IncidentReader + ReservationReader + ?Sized,
{
    if !user.is_admin {
        return Err(ServiceError::Forbidden);
    }

    let dashboard = load_dashboard(repo, user)?;
    let (_, unseen_incidents) = repo.list_incidents(IncidentListQuery::new().seen(false))?;
    let (_, reservations) = repo.list_reservations(ReservationListQuery::new())?;

    Ok(AdminDashboardData {
        dashboard,
        unseen_incidents,
        reservations,
    })
}

/// Load a page of completed orders for the history view.
pub fn load_history<R>(
    repo: &R,
    _user: &AuthenticatedUser,
    page: Option<usize>,
) -> ServiceResult<HistoryData>
where
    R: OrderReader + ?Sized,
{
    let page = page.unwrap_or(1).max(1);
    let query = OrderListQuery::new()
        .completed(true)
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, orders) = repo.list_orders(query)?;

    Ok(HistoryData {
        orders: Paginated::new(orders, page, total_pages(total, DEFAULT_ITEMS_PER_PAGE)),
    })
}

/// Load the administration page: room layout plus the staff directory.
pub fn load_restaurant<R>(
    repo: &R,
    user: &AuthenticatedUser,
    employee_page: Option<usize>,
) -> ServiceResult<RestaurantData>
where
    R: FloorReader + DiningTableReader + UserReader + ?Sized,
{
    if !user.is_admin {
        return Err(ServiceError::Forbidden);
    }

    let floors = repo.list_floors()?;
    let (_, tables) = repo.list_tables(TableListQuery::new())?;
    let employees = employees::list_employees(
        repo,
        user,
        EmployeeListParams {
            search: None,
            page: employee_page,
        },
    )?;

    Ok(RestaurantData {
        floors,
        tables,
        employees,
    })
}

/// Load the whole menu grouped by section.
pub fn load_menu<R>(repo: &R, _user: &AuthenticatedUser) -> ServiceResult<MenuData>
where
    R: DishReader + ?Sized,
{
    let (_, dishes) = repo.list_dishes(DishListQuery::new())?;

    let mut menu = MenuData {
        starters: Vec::new(),
        mains: Vec::new(),
        desserts: Vec::new(),
        drinks: Vec::new(),
    };

    for dish in dishes {
        match dish.category {
            DishCategory::Starter => menu.starters.push(dish),
            DishCategory::Main => menu.mains.push(dish),
            DishCategory::Dessert => menu.desserts.push(dish),
            DishCategory::Drink => menu.drinks.push(dish),
        }
    }

    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::mock::{MockDishReader, MockOrderReader};

    fn employee() -> AuthenticatedUser {
        AuthenticatedUser {
            id: 7,
            email: "waiter@example.com".to_string(),
            name: "Waiter".to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn history_only_asks_for_completed_orders() {
        let mut repo = MockOrderReader::new();

        repo.expect_list_orders()
            .times(1)
            .withf(|query| {
                assert_eq!(query.completed, Some(true));
                assert!(query.table_id.is_none());
                true
            })
            .returning(|_| Ok((0, Vec::new())));

        let data = load_history(&repo, &employee(), None).expect("expected success");

        assert!(data.orders.items.is_empty());
    }

    #[test]
    fn menu_groups_dishes_by_section() {
        let mut repo = MockDishReader::new();

        repo.expect_list_dishes().times(1).returning(|_| {
            let dish = |id: i32, category: DishCategory| Dish {
                id,
                name: format!("Plato {id}"),
                description: None,
                price: 1000,
                category,
                image: None,
            };
            Ok((
                3,
                vec![
                    dish(1, DishCategory::Drink),
                    dish(2, DishCategory::Main),
                    dish(3, DishCategory::Drink),
                ],
            ))
        });

        let menu = load_menu(&repo, &employee()).expect("expected success");

        assert_eq!(menu.drinks.len(), 2);
        assert_eq!(menu.mains.len(), 1);
        assert!(menu.starters.is_empty());
    }
}
