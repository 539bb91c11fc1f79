pub mod config;
pub mod database;
pub mod error;
pub mod fairings;
pub mod models;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;
pub mod views;

use rocket_dyn_templates::Template;
use std::sync::Arc;

pub use config::AppConfig;
pub use database::DatabaseService;
pub use error::AppError;
pub use fairings::RequestLogger;
pub use state::AppState;

/// Builds the application from environment configuration
pub fn create_rocket() -> Result<rocket::Rocket<rocket::Build>, Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();
    build_rocket(config)
}

/// Builds the application for an explicit configuration
pub fn build_rocket(
    config: AppConfig,
) -> Result<rocket::Rocket<rocket::Build>, Box<dyn std::error::Error>> {
    let database = Arc::new(DatabaseService::new(&config.database_url)?);
    let figment = config.figment();

    let state = AppState { config, database };

    Ok(rocket::custom(figment)
        .manage(state)
        .attach(Template::fairing())
        .attach(RequestLogger)
        .mount("/", routes::get_routes())
        .register("/", routes::catchers::get_catchers()))
}
