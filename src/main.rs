use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;
use env_logger::Env;
use log::info;
use sea_orm_migration::MigratorTrait;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tailings_monitor::api;
use tailings_monitor::database::TailingsDb;
use tailings_monitor::migration::Migrator;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tailings monitoring API",
        description = "Sites, model runs, measurement points and sample series stored in the tailings database"
    ),
    paths(
        api::clients::create_client,
        api::clients::list_clients,
        api::clients::delete_client,
        api::frequencies::create_frequency,
        api::frequencies::list_frequencies,
        api::sites::create_site,
        api::sites::list_sites,
        api::sites::get_site,
        api::sites::delete_site,
        api::model_runs::create_model_run,
        api::model_runs::list_model_runs,
        api::points::push_points,
        api::points::list_points,
        api::samples::push_samples,
        api::samples::list_samples,
    )
)]
struct ApiDoc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logger (RUST_LOG overrides default if set)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // All monitoring models live in the named tailings database; connect to it
    // and run migrations before starting the server
    let db = TailingsDb::connect()
        .await
        .expect("Failed to connect to the tailings database");

    // Run pending migrations (idempotent)
    Migrator::up(db.conn(), None)
        .await
        .expect("Failed to run database migrations");

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    info!("Server running at http://{}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Compress::default())
            // Log each incoming request with status, time, and size
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
            // The API is consumed by dashboards served elsewhere
            .wrap(Cors::permissive())
            // Share the tailings connection with handlers
            .app_data(web::Data::new(db.clone()))
            .service(
                web::scope("/api")
                    .wrap(middleware::NormalizePath::trim())
                    .configure(api::init_routes),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
