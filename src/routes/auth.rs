use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::{redirect, render_template};
use crate::services::{ServiceError, auth as auth_service};

#[get("/login")]
pub async fn show_login(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = Context::new();

    let messages = flash_messages
        .iter()
        .map(|message| (message.level().to_string(), message.content().to_string()))
        .collect::<Vec<_>>();
    context.insert("messages", &messages);

    render_template(&tera, "login.html", &context)
}

#[post("/login")]
pub async fn process_login(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), form) {
        Ok(user) => {
            let destination = if user.is_admin {
                "/admin_dashboard"
            } else {
                "/dashboard"
            };

            let session = match user.to_session_string() {
                Ok(session) => session,
                Err(err) => {
                    log::error!("Failed to serialize the session: {err}");
                    return HttpResponse::InternalServerError().finish();
                }
            };

            if let Err(err) = Identity::login(&req.extensions(), session) {
                log::error!("Failed to open the session: {err}");
                return HttpResponse::InternalServerError().finish();
            }

            redirect(destination)
        }
        Err(ServiceError::Unauthorized) | Err(ServiceError::Form(_)) => {
            FlashMessage::error("Usuario o contraseña inválidos.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to process the login: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect("/login")
}
