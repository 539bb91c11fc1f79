use log::info;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub host: String,
    pub data_dir: String,
    pub database_url: String,
    pub template_dir: String,
    pub session_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            data_dir: "./data".to_string(),
            database_url: "./data/gamestore.db".to_string(),
            template_dir: "templates".to_string(),
            session_ttl_hours: 24,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("GAMESTORE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .unwrap_or(8000);

        let host = env::var("GAMESTORE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let data_dir = env::var("GAMESTORE_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let database_url = env::var("GAMESTORE_DATABASE_URL")
            .unwrap_or_else(|_| format!("{data_dir}/gamestore.db"));

        let template_dir =
            env::var("GAMESTORE_TEMPLATE_DIR").unwrap_or_else(|_| "templates".to_string());

        let session_ttl_hours = env::var("GAMESTORE_SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse::<i64>()
            .ok()
            .filter(|hours| *hours > 0)
            .unwrap_or(24);

        // bcrypt accepts costs 4 through 31
        let bcrypt_cost = env::var("GAMESTORE_BCRYPT_COST")
            .ok()
            .and_then(|cost| cost.parse::<u32>().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or(bcrypt::DEFAULT_COST);

        info!("Configuration loaded:");
        info!("  Host: {host}");
        info!("  Port: {port}");
        info!("  Data Directory: {data_dir}");
        info!("  Database URL: {database_url}");
        info!("  Template Directory: {template_dir}");
        info!("  Session TTL: {session_ttl_hours} hours");
        info!("  Password Hash Cost: {bcrypt_cost}");

        Self {
            port,
            host,
            data_dir,
            database_url,
            template_dir,
            session_ttl_hours,
            bcrypt_cost,
        }
    }

    /// Rocket figment carrying the server address and the template directory
    pub fn figment(&self) -> rocket::figment::Figment {
        rocket::Config::figment()
            .merge(("port", self.port))
            .merge(("address", self.host.clone()))
            .merge(("template_dir", self.template_dir.clone()))
    }
}
