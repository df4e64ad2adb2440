use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use book_catalog::db::{establish_connection_pool_with_size, migrations};
use book_catalog::models::config::ServerConfig;
use book_catalog::repository::DieselRepository;
use book_catalog::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool_with_size(&config.database.url, config.database.pool_size)
        .map_err(|e| {
            log::error!("Failed to open database {}: {e}", config.database.url);
            io::Error::other(e)
        })?;

    let applied = migrations::run_pending(&pool).map_err(|e| {
        log::error!("Failed to run migrations: {e}");
        io::Error::other(e)
    })?;
    log::info!("Applied {applied} pending migration(s)");

    let repo = web::Data::new(DieselRepository::new(pool));
    let auth = web::Data::new(config.auth.clone());
    let bind_address = (config.server.address.clone(), config.server.port);

    log::info!(
        "Starting server on {}:{}",
        config.server.address,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors_headers())
            .wrap(Logger::default())
            .app_data(repo.clone())
            .app_data(auth.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
