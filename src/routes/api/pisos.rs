use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::floor::{AddFloorForm, EditFloorForm};
use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::services::floors as floor_service;

#[get("/")]
pub async fn list(user: AuthenticatedUser, repo: web::Data<DieselRepository>) -> impl Responder {
    match floor_service::list_floors(repo.get_ref(), &user) {
        Ok(floors) => HttpResponse::Ok().json(floors),
        Err(err) => error_response(err),
    }
}

#[get("/{id}")]
pub async fn retrieve(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match floor_service::get_floor(repo.get_ref(), &user, path.into_inner()) {
        Ok(floor) => HttpResponse::Ok().json(floor),
        Err(err) => error_response(err),
    }
}

#[post("/")]
pub async fn create(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddFloorForm>,
) -> impl Responder {
    match floor_service::create_floor(repo.get_ref(), &user, form.into_inner()) {
        Ok(floor) => HttpResponse::Created().json(floor),
        Err(err) => error_response(err),
    }
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditFloorForm>,
) -> impl Responder {
    match floor_service::modify_floor(repo.get_ref(), &user, path.into_inner(), form.into_inner())
    {
        Ok(floor) => HttpResponse::Ok().json(floor),
        Err(err) => error_response(err),
    }
}

#[delete("/{id}")]
pub async fn destroy(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match floor_service::remove_floor(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
