use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::employee::{AddEmployeeForm, EditEmployeeForm};
use crate::repository::DieselRepository;
use crate::routes::api::error_response;
use crate::services::employees::{self as employee_service, EmployeeListParams};

#[get("/")]
pub async fn list(
    user: AuthenticatedUser,
    params: web::Query<EmployeeListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match employee_service::list_employees(repo.get_ref(), &user, params.into_inner()) {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(err) => error_response(err),
    }
}

#[get("/{id}")]
pub async fn retrieve(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match employee_service::get_employee(repo.get_ref(), &user, path.into_inner()) {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(err) => error_response(err),
    }
}

#[post("/")]
pub async fn create(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddEmployeeForm>,
) -> impl Responder {
    match employee_service::create_employee(repo.get_ref(), &user, form.into_inner()) {
        Ok(employee) => HttpResponse::Created().json(employee),
        Err(err) => error_response(err),
    }
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditEmployeeForm>,
) -> impl Responder {
    match employee_service::modify_employee(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(err) => error_response(err),
    }
}

#[delete("/{id}")]
pub async fn destroy(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match employee_service::remove_employee(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
