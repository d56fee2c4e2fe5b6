//! JSON surface under `/api/`. Resource paths keep the Spanish names
//! the clients already speak; payload fields are the domain's.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod detalles;
pub mod empleados;
pub mod incidentes;
pub mod mesas;
pub mod pedidos;
pub mod pisos;
pub mod platos;
pub mod reservas;

/// Map a service error to the JSON error envelope.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(json!({ "error": "authentication required" }))
        }
        ServiceError::Forbidden => {
            HttpResponse::Forbidden().json(json!({ "error": "forbidden" }))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({ "error": "not found" }))
        }
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(json!({ "error": message }))
        }
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal error" }))
        }
    }
}
