use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Layered load: `configuration.*` file, then `APP__*` variables, then a
    /// bare `PORT` variable as set by most hosting platforms. Reads the
    /// process environment only; `.env` loading is up to the binary.
    pub fn load() -> Result<Self, AppError> {
        let platform_port = std::env::var("PORT")
            .ok()
            .map(|p| {
                p.trim().parse::<u16>().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("PORT is not a valid port: {}", e))
                })
            })
            .transpose()?;

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", platform_port.map(i64::from))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
