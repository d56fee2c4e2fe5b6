use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::dish::{AddDishForm, EditDishForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, dishes as dish_service, pages as page_service};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<usize>,
}

#[get("/")]
pub async fn show_index(user: Option<AuthenticatedUser>) -> impl Responder {
    match user {
        Some(user) if user.is_admin => redirect("/admin_dashboard"),
        Some(_) => redirect("/dashboard"),
        None => redirect("/login"),
    }
}

#[get("/dashboard")]
pub async fn show_dashboard(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect("/login");
    };

    match page_service::load_dashboard(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "dashboard");
            context.insert("floors", &data.floors);
            context.insert("tables", &data.tables);
            context.insert("open_orders", &data.open_orders);
            render_template(&tera, "dashboard.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/admin_dashboard")]
pub async fn show_admin_dashboard(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect("/login");
    };

    match page_service::load_admin_dashboard(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "admin_dashboard");
            context.insert("floors", &data.dashboard.floors);
            context.insert("tables", &data.dashboard.tables);
            context.insert("open_orders", &data.dashboard.open_orders);
            context.insert("unseen_incidents", &data.unseen_incidents);
            context.insert("reservations", &data.reservations);
            render_template(&tera, "admin_dashboard.html", &context)
        }
        Err(ServiceError::Forbidden) => {
            FlashMessage::error("Acceso restringido a administradores.").send();
            redirect("/dashboard")
        }
        Err(err) => {
            log::error!("Failed to load the admin dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/historial")]
pub async fn show_history(
    user: Option<AuthenticatedUser>,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect("/login");
    };

    match page_service::load_history(repo.get_ref(), &user, params.page) {
        Ok(data) => {
            let totals = data
                .orders
                .items
                .iter()
                .map(|order| order.total())
                .collect::<Vec<_>>();

            let mut context = base_context(&flash_messages, &user, "historial");
            context.insert("orders", &data.orders.items);
            context.insert("totals", &totals);
            context.insert("page", &data.orders.page);
            context.insert("total_pages", &data.orders.total_pages);
            render_template(&tera, "historial.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the order history: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/restaurante")]
pub async fn show_restaurant(
    user: Option<AuthenticatedUser>,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect("/login");
    };

    match page_service::load_restaurant(repo.get_ref(), &user, params.page) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "restaurante");
            context.insert("floors", &data.floors);
            context.insert("tables", &data.tables);
            context.insert("employees", &data.employees.items);
            context.insert("employees_page", &data.employees.page);
            context.insert("employees_total_pages", &data.employees.total_pages);
            render_template(&tera, "restaurante.html", &context)
        }
        Err(ServiceError::Forbidden) => {
            FlashMessage::error("Acceso restringido a administradores.").send();
            redirect("/dashboard")
        }
        Err(err) => {
            log::error!("Failed to load the restaurant page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/carta")]
pub async fn show_menu(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect("/login");
    };

    match page_service::load_menu(repo.get_ref(), &user) {
        Ok(menu) => {
            let mut context = base_context(&flash_messages, &user, "carta");
            context.insert("starters", &menu.starters);
            context.insert("mains", &menu.mains);
            context.insert("desserts", &menu.desserts);
            context.insert("drinks", &menu.drinks);
            render_template(&tera, "carta.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the menu: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/carta/add")]
pub async fn add_menu_dish(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddDishForm>,
) -> impl Responder {
    match dish_service::create_dish(repo.get_ref(), &user, form) {
        Ok(dish) => {
            FlashMessage::success(format!("Plato «{}» agregado.", dish.name)).send();
            redirect("/carta")
        }
        Err(ServiceError::Forbidden) => {
            FlashMessage::error("Acceso restringido a administradores.").send();
            redirect("/carta")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/carta")
        }
        Err(err) => {
            log::error!("Failed to add a dish: {err}");
            FlashMessage::error("Error al agregar el plato.").send();
            redirect("/carta")
        }
    }
}

#[post("/carta/{id}/edit")]
pub async fn edit_menu_dish(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<EditDishForm>,
) -> impl Responder {
    let dish_id = path.into_inner();

    match dish_service::modify_dish(repo.get_ref(), &user, dish_id, form) {
        Ok(dish) => {
            FlashMessage::success(format!("Plato «{}» actualizado.", dish.name)).send();
            redirect("/carta")
        }
        Err(ServiceError::Forbidden) => {
            FlashMessage::error("Acceso restringido a administradores.").send();
            redirect("/carta")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("El plato no existe.").send();
            redirect("/carta")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/carta")
        }
        Err(err) => {
            log::error!("Failed to update a dish: {err}");
            FlashMessage::error("Error al actualizar el plato.").send();
            redirect("/carta")
        }
    }
}

#[post("/carta/{id}/delete")]
pub async fn delete_menu_dish(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let dish_id = path.into_inner();

    match dish_service::remove_dish(repo.get_ref(), &user, dish_id) {
        Ok(()) => {
            FlashMessage::success("Plato eliminado.").send();
            redirect("/carta")
        }
        Err(ServiceError::Forbidden) => {
            FlashMessage::error("Acceso restringido a administradores.").send();
            redirect("/carta")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("El plato no existe.").send();
            redirect("/carta")
        }
        Err(err) => {
            log::error!("Failed to delete a dish: {err}");
            FlashMessage::error("Error al eliminar el plato.").send();
            redirect("/carta")
        }
    }
}
