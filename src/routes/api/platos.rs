use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::dish::{AddDishForm, EditDishForm};
use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::services::dishes::{self as dish_service, DishListParams};

#[get("/")]
pub async fn list(
    user: AuthenticatedUser,
    params: web::Query<DishListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match dish_service::list_dishes(repo.get_ref(), &user, params.into_inner()) {
        Ok(dishes) => HttpResponse::Ok().json(dishes),
        Err(err) => error_response(err),
    }
}

#[get("/{id}")]
pub async fn retrieve(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match dish_service::get_dish(repo.get_ref(), &user, path.into_inner()) {
        Ok(dish) => HttpResponse::Ok().json(dish),
        Err(err) => error_response(err),
    }
}

#[post("/")]
pub async fn create(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddDishForm>,
) -> impl Responder {
    match dish_service::create_dish(repo.get_ref(), &user, form.into_inner()) {
        Ok(dish) => HttpResponse::Created().json(dish),
        Err(err) => error_response(err),
    }
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditDishForm>,
) -> impl Responder {
    match dish_service::modify_dish(repo.get_ref(), &user, path.into_inner(), form.into_inner()) {
        Ok(dish) => HttpResponse::Ok().json(dish),
        Err(err) => error_response(err),
    }
}

#[delete("/{id}")]
pub async fn destroy(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match dish_service::remove_dish(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
