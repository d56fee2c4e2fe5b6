use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::incident::{AddIncidentForm, EditIncidentForm};
use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::services::incidents::{self as incident_service, IncidentListParams};

#[get("/")]
pub async fn list(
    user: AuthenticatedUser,
    params: web::Query<IncidentListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match incident_service::list_incidents(repo.get_ref(), &user, params.into_inner()) {
        Ok(incidents) => HttpResponse::Ok().json(incidents),
        Err(err) => error_response(err),
    }
}

#[get("/{id}")]
pub async fn retrieve(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match incident_service::get_incident(repo.get_ref(), &user, path.into_inner()) {
        Ok(incident) => HttpResponse::Ok().json(incident),
        Err(err) => error_response(err),
    }
}

#[post("/")]
pub async fn create(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddIncidentForm>,
) -> impl Responder {
    match incident_service::create_incident(repo.get_ref(), &user, form.into_inner()) {
        Ok(incident) => HttpResponse::Created().json(incident),
        Err(err) => error_response(err),
    }
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditIncidentForm>,
) -> impl Responder {
    match incident_service::modify_incident(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(incident) => HttpResponse::Ok().json(incident),
        Err(err) => error_response(err),
    }
}

#[delete("/{id}")]
pub async fn destroy(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match incident_service::remove_incident(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

/// Flag the incident as reviewed.
#[post("/{id}/marcar_visto")]
pub async fn mark_seen(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match incident_service::mark_incident_seen(repo.get_ref(), &user, path.into_inner()) {
        Ok(incident) => HttpResponse::Ok().json(incident),
        Err(err) => error_response(err),
    }
}
