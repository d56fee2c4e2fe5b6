use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::user::User;

/// Identity stored in the login session cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl AuthenticatedUser {
    /// Serialized form handed to `Identity::login`.
    pub fn to_session_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// 401 carrying the same `{"error": ...}` body the API handlers return.
fn unauthorized(message: &str) -> Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::Unauthorized().json(json!({"error": message})),
    )
    .into()
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();
        let result = match identity {
            Ok(identity) => match identity.id() {
                Ok(raw) => {
                    serde_json::from_str(&raw).map_err(|_| unauthorized("invalid session"))
                }
                Err(_) => Err(unauthorized("invalid session")),
            },
            Err(_) => Err(unauthorized("authentication required")),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn rejection_carries_the_json_error_envelope() {
        let err = unauthorized("authentication required");
        let response = HttpResponse::from_error(err);

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let parsed: serde_json::Value =
            serde_json::from_slice(&body).expect("body is JSON");
        assert_eq!(parsed["error"], "authentication required");
    }
}
