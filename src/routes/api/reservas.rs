use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::reservation::{AddReservationForm, EditReservationForm};
use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::services::reservations::{self as reservation_service, ReservationListParams};

#[get("/")]
pub async fn list(
    user: AuthenticatedUser,
    params: web::Query<ReservationListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match reservation_service::list_reservations(repo.get_ref(), &user, params.into_inner()) {
        Ok(reservations) => HttpResponse::Ok().json(reservations),
        Err(err) => error_response(err),
    }
}

#[get("/{id}")]
pub async fn retrieve(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match reservation_service::get_reservation(repo.get_ref(), &user, path.into_inner()) {
        Ok(reservation) => HttpResponse::Ok().json(reservation),
        Err(err) => error_response(err),
    }
}

/// Book a table. The table is flipped to `Reserved` whatever state it
/// is in.
#[post("/")]
pub async fn create(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddReservationForm>,
) -> impl Responder {
    match reservation_service::create_reservation(repo.get_ref(), &user, form.into_inner()) {
        Ok(reservation) => HttpResponse::Created().json(reservation),
        Err(err) => error_response(err),
    }
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditReservationForm>,
) -> impl Responder {
    match reservation_service::modify_reservation(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(reservation) => HttpResponse::Ok().json(reservation),
        Err(err) => error_response(err),
    }
}

/// Cancel the reservation; its table goes back to `Free`.
#[delete("/{id}")]
pub async fn destroy(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match reservation_service::remove_reservation(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
