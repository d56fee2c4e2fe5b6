use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::order::{AddOrderLineForm, EditOrderLineForm};
use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::services::orders::{self as order_service, OrderLineListParams};

#[get("/")]
pub async fn list(
    user: AuthenticatedUser,
    params: web::Query<OrderLineListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::list_lines(repo.get_ref(), &user, params.into_inner()) {
        Ok(lines) => HttpResponse::Ok().json(lines),
        Err(err) => error_response(err),
    }
}

#[get("/{id}")]
pub async fn retrieve(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::get_line(repo.get_ref(), &user, path.into_inner()) {
        Ok(line) => HttpResponse::Ok().json(line),
        Err(err) => error_response(err),
    }
}

#[post("/")]
pub async fn create(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddOrderLineForm>,
) -> impl Responder {
    match order_service::create_line(repo.get_ref(), &user, form.into_inner()) {
        Ok(line) => HttpResponse::Created().json(line),
        Err(err) => error_response(err),
    }
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditOrderLineForm>,
) -> impl Responder {
    match order_service::modify_line(repo.get_ref(), &user, path.into_inner(), form.into_inner())
    {
        Ok(line) => HttpResponse::Ok().json(line),
        Err(err) => error_response(err),
    }
}

#[delete("/{id}")]
pub async fn destroy(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::remove_line(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
