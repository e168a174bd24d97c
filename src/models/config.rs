//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::db::PoolConfig;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default)]
    pub pool: PoolConfig,
    /// Include underlying error messages in API error bodies.
    #[serde(default)]
    pub expose_error_details: bool,
}

impl ServerConfig {
    /// Loads `config/default`, then `config/{app_env}`, then `APP_*`
    /// environment variables. A bare `DATABASE_URL` wins over all of them.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("database_url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        let server_config = settings.try_deserialize::<ServerConfig>()?;
        server_config.validate()?;
        Ok(server_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Message("database_url is not set".to_string()));
        }
        Ok(())
    }
}
