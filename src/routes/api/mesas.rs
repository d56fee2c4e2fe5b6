use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::table::{AddTableForm, EditTableForm, SetTableStateForm};
use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::services::tables::{self as table_service, TableListParams};

#[get("/")]
pub async fn list(
    user: AuthenticatedUser,
    params: web::Query<TableListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match table_service::list_tables(repo.get_ref(), &user, params.into_inner()) {
        Ok(tables) => HttpResponse::Ok().json(tables),
        Err(err) => error_response(err),
    }
}

#[get("/{id}")]
pub async fn retrieve(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match table_service::get_table(repo.get_ref(), &user, path.into_inner()) {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(err) => error_response(err),
    }
}

#[post("/")]
pub async fn create(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddTableForm>,
) -> impl Responder {
    match table_service::create_table(repo.get_ref(), &user, form.into_inner()) {
        Ok(table) => HttpResponse::Created().json(table),
        Err(err) => error_response(err),
    }
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditTableForm>,
) -> impl Responder {
    match table_service::modify_table(repo.get_ref(), &user, path.into_inner(), form.into_inner())
    {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(err) => error_response(err),
    }
}

#[delete("/{id}")]
pub async fn destroy(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match table_service::remove_table(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

/// Open a tab on the table. Answers 409 unless the table is free.
#[post("/{id}/iniciar_pedido")]
pub async fn start_order(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match table_service::start_table_order(repo.get_ref(), &user, path.into_inner()) {
        Ok(order) => HttpResponse::Created().json(order),
        Err(err) => error_response(err),
    }
}

/// Force the table to `Free` or `Maintenance`.
#[post("/{id}/cambiar_estado")]
pub async fn change_state(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<SetTableStateForm>,
) -> impl Responder {
    match table_service::force_table_state(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(err) => error_response(err),
    }
}
