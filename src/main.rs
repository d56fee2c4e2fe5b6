use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use comanda::db::establish_connection_pool;
use comanda::repository::DieselRepository;
use comanda::routes::api::{
    detalles, empleados, incidentes, mesas, pedidos, pisos, platos, reservas,
};
use comanda::routes::auth::{logout, process_login, show_login};
use comanda::routes::pages::{
    add_menu_dish, delete_menu_dish, edit_menu_dish, show_admin_dashboard, show_dashboard,
    show_history, show_index, show_menu, show_restaurant,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("comanda.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret = env::var("SECRET_KEY");
    let secret_key = match &secret {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let domain = env::var("DOMAIN").unwrap_or("localhost".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_login)
            .service(process_login)
            .service(logout)
            .service(show_index)
            .service(show_dashboard)
            .service(show_admin_dashboard)
            .service(show_history)
            .service(show_restaurant)
            .service(show_menu)
            .service(add_menu_dish)
            .service(edit_menu_dish)
            .service(delete_menu_dish)
            .service(
                web::scope("/api/pisos")
                    .service(pisos::list)
                    .service(pisos::retrieve)
                    .service(pisos::create)
                    .service(pisos::update)
                    .service(pisos::destroy),
            )
            .service(
                web::scope("/api/mesas")
                    .service(mesas::list)
                    .service(mesas::retrieve)
                    .service(mesas::create)
                    .service(mesas::update)
                    .service(mesas::destroy)
                    .service(mesas::start_order)
                    .service(mesas::change_state),
            )
            .service(
                web::scope("/api/platos")
                    .service(platos::list)
                    .service(platos::retrieve)
                    .service(platos::create)
                    .service(platos::update)
                    .service(platos::destroy),
            )
            .service(
                web::scope("/api/pedidos")
                    .service(pedidos::list)
                    .service(pedidos::create)
                    .service(pedidos::retrieve)
                    .service(pedidos::update)
                    .service(pedidos::destroy)
                    .service(pedidos::add_dish)
                    .service(pedidos::remove_dish)
                    .service(pedidos::finalize),
            )
            .service(
                web::scope("/api/detalles")
                    .service(detalles::list)
                    .service(detalles::retrieve)
                    .service(detalles::create)
                    .service(detalles::update)
                    .service(detalles::destroy),
            )
            .service(
                web::scope("/api/reservas")
                    .service(reservas::list)
                    .service(reservas::retrieve)
                    .service(reservas::create)
                    .service(reservas::update)
                    .service(reservas::destroy),
            )
            .service(
                web::scope("/api/incidentes")
                    .service(incidentes::list)
                    .service(incidentes::retrieve)
                    .service(incidentes::create)
                    .service(incidentes::update)
                    .service(incidentes::destroy)
                    .service(incidentes::mark_seen),
            )
            .service(
                web::scope("/api/empleados")
                    .service(empleados::list)
                    .service(empleados::retrieve)
                    .service(empleados::create)
                    .service(empleados::update)
                    .service(empleados::destroy),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
