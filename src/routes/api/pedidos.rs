use actix_web::{HttpResponse, Responder, delete, get, post, route, web};
use serde::{Deserialize, Serialize};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::order::Order;
use crate::forms::order::{DishLineForm, EditOrderForm};
use crate::pagination::Paginated;
use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::services::orders::{self as order_service, OrderListParams};

/// Body of the order create endpoint: `{"mesa_id": 4}`.
#[derive(Debug, Deserialize)]
pub struct CreateOrderForm {
    pub mesa_id: i32,
}

/// An order plus its derived total, which only exists on the wire.
#[derive(Serialize)]
struct OrderPayload<'a> {
    #[serde(flatten)]
    order: &'a Order,
    total: i64,
}

impl<'a> OrderPayload<'a> {
    fn new(order: &'a Order) -> Self {
        Self {
            total: order.total(),
            order,
        }
    }
}

fn order_response(order: &Order) -> HttpResponse {
    HttpResponse::Ok().json(OrderPayload::new(order))
}

#[get("/")]
pub async fn list(
    user: AuthenticatedUser,
    params: web::Query<OrderListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::list_orders(repo.get_ref(), &user, params.into_inner()) {
        Ok(orders) => {
            let items = orders.items.iter().map(OrderPayload::new).collect();
            HttpResponse::Ok().json(Paginated::new(items, orders.page, orders.total_pages))
        }
        Err(err) => error_response(err),
    }
}

/// Open an order on a table. Same semantics as the `iniciar_pedido`
/// action on the table resource.
#[post("/")]
pub async fn create(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateOrderForm>,
) -> impl Responder {
    match crate::services::tables::start_table_order(repo.get_ref(), &user, form.mesa_id) {
        Ok(order) => HttpResponse::Created().json(OrderPayload::new(&order)),
        Err(err) => error_response(err),
    }
}

#[get("/{id}")]
pub async fn retrieve(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::get_order(repo.get_ref(), &user, path.into_inner()) {
        Ok(order) => order_response(&order),
        Err(err) => error_response(err),
    }
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditOrderForm>,
) -> impl Responder {
    match order_service::modify_order(repo.get_ref(), &user, path.into_inner(), form.into_inner())
    {
        Ok(order) => order_response(&order),
        Err(err) => error_response(err),
    }
}

#[delete("/{id}")]
pub async fn destroy(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::remove_order(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

/// Add one unit of a dish to the order.
#[post("/{id}/agregar_plato")]
pub async fn add_dish(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<DishLineForm>,
) -> impl Responder {
    match order_service::add_dish_line(repo.get_ref(), &user, path.into_inner(), form.into_inner())
    {
        Ok(order) => order_response(&order),
        Err(err) => error_response(err),
    }
}

/// Remove one unit of a dish from the order.
#[post("/{id}/remover_plato")]
pub async fn remove_dish(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<DishLineForm>,
) -> impl Responder {
    match order_service::remove_dish_line(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(order) => order_response(&order),
        Err(err) => error_response(err),
    }
}

/// Close the order and free its table.
#[post("/{id}/finalizar")]
pub async fn finalize(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::finalize_order(repo.get_ref(), &user, path.into_inner()) {
        Ok(order) => order_response(&order),
        Err(err) => error_response(err),
    }
}
