use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::domain::auth::AuthenticatedUser;

pub mod api;
pub mod auth;
pub mod pages;

/// Template context shared by every page: the logged-in user, the
/// active navigation entry and any pending flash messages.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    active_page: &str,
) -> Context {
    let mut context = Context::new();

    let messages = flash_messages
        .iter()
        .map(|message| (message.level().to_string(), message.content().to_string()))
        .collect::<Vec<_>>();

    context.insert("current_user", user);
    context.insert("active_page", active_page);
    context.insert("messages", &messages);

    context
}

/// A `303 See Other` to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((actix_web::http::header::LOCATION, location))
        .finish()
}

/// Render `template` or log the failure and answer 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
