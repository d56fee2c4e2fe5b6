use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::order::{Order, OrderLine, OrderListQuery};
use crate::forms::order::{AddOrderLineForm, DishLineForm, EditOrderForm, EditOrderLineForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::policy::{Action, Resource};
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult, ensure, total_pages};

/// Query string accepted by the order list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct OrderListParams {
    /// Filter by table id.
    #[serde(default)]
    pub mesa: Option<i32>,
    /// Filter by completion flag.
    #[serde(default)]
    pub completado: Option<bool>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl OrderListParams {
    fn into_query(self) -> (OrderListQuery, usize) {
        let page = self.page.unwrap_or(1).max(1);

        let mut query = OrderListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
        if let Some(table_id) = self.mesa {
            query = query.table_id(table_id);
        }
        if let Some(completed) = self.completado {
            query = query.completed(completed);
        }

        (query, page)
    }
}

/// Query string accepted by the line-item list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct OrderLineListParams {
    /// Filter by order id.
    #[serde(default)]
    pub pedido: Option<i32>,
}

pub fn list_orders<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: OrderListParams,
) -> ServiceResult<Paginated<Order>>
where
    R: OrderReader + ?Sized,
{
    ensure(user, Action::List, Resource::Orders)?;

    let (query, page) = params.into_query();
    let (total, orders) = repo.list_orders(query)?;

    Ok(Paginated::new(
        orders,
        page,
        total_pages(total, DEFAULT_ITEMS_PER_PAGE),
    ))
}

pub fn get_order<R>(repo: &R, user: &AuthenticatedUser, order_id: i32) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    ensure(user, Action::Retrieve, Resource::Orders)?;

    repo.get_order_by_id(order_id)?.ok_or(ServiceError::NotFound)
}

/// Add one unit of a dish to an open order.
pub fn add_dish_line<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    form: DishLineForm,
) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    ensure(user, Action::EditLines, Resource::Orders)?;

    let dish_id = form.dish_id()?;
    repo.add_dish(order_id, dish_id).map_err(Into::into)
}

/// Remove one unit of a dish from an order; the line disappears when
/// it reaches zero.
pub fn remove_dish_line<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    form: DishLineForm,
) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    ensure(user, Action::EditLines, Resource::Orders)?;

    let dish_id = form.dish_id()?;
    repo.remove_dish(order_id, dish_id).map_err(Into::into)
}

/// Close an order and free its table.
pub fn finalize_order<R>(repo: &R, user: &AuthenticatedUser, order_id: i32) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    ensure(user, Action::Finalize, Resource::Orders)?;

    repo.finalize_order(order_id).map_err(Into::into)
}

pub fn modify_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    form: EditOrderForm,
) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    ensure(user, Action::Update, Resource::Orders)?;

    let update = form.into_update_order();
    repo.update_order(order_id, &update).map_err(Into::into)
}

pub fn remove_order<R>(repo: &R, user: &AuthenticatedUser, order_id: i32) -> ServiceResult<()>
where
    R: OrderWriter + ?Sized,
{
    ensure(user, Action::Delete, Resource::Orders)?;

    repo.delete_order(order_id).map_err(Into::into)
}

pub fn list_lines<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: OrderLineListParams,
) -> ServiceResult<Vec<OrderLine>>
where
    R: OrderReader + ?Sized,
{
    ensure(user, Action::List, Resource::Orders)?;

    repo.list_lines(params.pedido).map_err(Into::into)
}

pub fn get_line<R>(repo: &R, user: &AuthenticatedUser, line_id: i32) -> ServiceResult<OrderLine>
where
    R: OrderReader + ?Sized,
{
    ensure(user, Action::Retrieve, Resource::Orders)?;

    repo.get_line_by_id(line_id)?.ok_or(ServiceError::NotFound)
}

/// Create a line with an explicit quantity through the line-item
/// resource.
pub fn create_line<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddOrderLineForm,
) -> ServiceResult<OrderLine>
where
    R: OrderWriter + ?Sized,
{
    ensure(user, Action::EditLines, Resource::Orders)?;

    let (order_id, dish_id, quantity) = form.into_parts()?;
    repo.create_line(order_id, dish_id, quantity)
        .map_err(Into::into)
}

pub fn modify_line<R>(
    repo: &R,
    user: &AuthenticatedUser,
    line_id: i32,
    form: EditOrderLineForm,
) -> ServiceResult<OrderLine>
where
    R: OrderWriter + ?Sized,
{
    ensure(user, Action::EditLines, Resource::Orders)?;

    let quantity = form.quantity()?;
    repo.set_line_quantity(line_id, quantity).map_err(Into::into)
}

pub fn remove_line<R>(repo: &R, user: &AuthenticatedUser, line_id: i32) -> ServiceResult<()>
where
    R: OrderWriter + ?Sized,
{
    ensure(user, Action::EditLines, Resource::Orders)?;

    repo.delete_line(line_id).map_err(Into::into)
}
