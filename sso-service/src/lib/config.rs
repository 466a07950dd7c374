use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::telemetry::LogProfile;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub env: LogProfile,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub grpc_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    pub ttl_minutes: i64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AdminConfig {
    /// Serve `IsAdmin` from the store instead of reporting it unimplemented
    #[serde(default)]
    pub lookup_enabled: bool,
}

fn default_max_connections() -> u32 {
    5
}

impl TokenConfig {
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.ttl_minutes)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__GRPC_PORT, TOKEN__TTL_MINUTES, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.ttl_minutes <= 0 {
            return Err(ConfigError::Message(format!(
                "token.ttl_minutes must be positive, got {}",
                self.token.ttl_minutes
            )));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Message(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
