use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::ApiDoc;
use crate::routes::books::{create_book, delete_book, get_book, list_books, update_book};
use crate::routes::categories::list_categories;

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Registers extractor configuration, the API routes, and the Swagger UI.
/// Shared between [`run`] and the HTTP test harness.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(routes::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(routes::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(routes::path_error_handler))
        .service(list_categories)
        .service(list_books)
        .service(get_book)
        .service(create_book)
        .service(update_book)
        .service(delete_book)
        .service(
            SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .default_service(web::route().to(routes::not_found));
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish the Diesel connection pool for the SQLite database. An
    // unreachable database is fatal before the listener starts.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;
    pool.get()
        .map_err(|e| std::io::Error::other(format!("Database connection check failed: {e}")))?;
    log::info!("Connected to the database");

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Server is listening on {}", server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(configure_app)
    })
    .bind(bind_address)?
    .run()
    .await
}
