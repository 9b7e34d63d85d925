mod config;
mod db;
mod errors;
mod middleware;
mod models;
mod routes;
mod services;
mod utils;

use actix_web::{App, HttpServer, web};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = config::AppConfig::from_env();

    tracing::info!("🔌 Connecting to database...");
    let db = db::establish_connection(&cfg.database_url)
        .await
        .expect("Failed to connect to database");
    db::create_tables(&db)
        .await
        .expect("Failed to create tables");
    tracing::info!("✅ Database connected!");

    tracing::info!("🚀 Starting server on http://{}:{}", cfg.host, cfg.port);

    let bind_addr = (cfg.host.clone(), cfg.port);
    let auth_cfg = web::Data::new(cfg.auth.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(auth_cfg.clone())
            .configure(routes::configure_routes)
    })
        .bind(bind_addr)?
        .run()
        .await
}
