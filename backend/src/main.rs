mod config;
mod routes;
mod snapshot;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::ServerConfig;
use routes::configure_routes;
use snapshot::Snapshot;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Serving frontend from {}", config.frontend_dir.display());

    let snapshot = match Snapshot::load(&config.snapshot_path) {
        Ok(snapshot) => {
            log::info!(
                "Loaded {} catalog records from {}",
                snapshot.records().len(),
                config.snapshot_path.display()
            );
            Some(snapshot)
        }
        Err(e) => {
            log::error!("Catalog snapshot {} unusable: {}", config.snapshot_path.display(), e);
            None
        }
    };
    let snapshot = web::Data::new(snapshot);

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    let frontend_dir = config.frontend_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(snapshot.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
