//! Verifies that the configured registry database is reachable.

use std::env;

use dotenvy::dotenv;

use entity_search::db::{describe_database_url, establish_connection_pool};
use entity_search::models::config::ServerConfig;
use entity_search::repository::errors::RepositoryError;
use entity_search::repository::{DieselRepository, StoreHealthReader};

/// Likely causes for a connection that was actively refused.
const REFUSED_HINTS: &[&str] = &[
    "the database server is not running or listens on another port",
    "a firewall blocks the database port",
    "this host is not allowed to connect",
];

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Testing database connection: {}",
        describe_database_url(&server_config.database_url)
    );

    let pool = match establish_connection_pool(&server_config.database_url, &server_config.pool)
    {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Connection failed: {e}");
            log_hints(&e.to_string());
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool, &server_config.database_url);

    match repo.store_status() {
        Ok(status) => {
            log::info!("Connection successful");
            log::info!("Current time: {}", status.current_time);
            log::info!("Total entities: {}", status.total_entities);
        }
        Err(err) => {
            log::error!("Connection failed: {err}");
            if let RepositoryError::ConnectionError(msg) = &err {
                log_hints(msg);
            }
            std::process::exit(1);
        }
    }
}

fn log_hints(message: &str) {
    if message.to_lowercase().contains("refused") {
        log::error!("Possible issues:");
        for (i, hint) in REFUSED_HINTS.iter().enumerate() {
            log::error!("{}. {hint}", i + 1);
        }
    }
}
