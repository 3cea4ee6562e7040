use std::net::SocketAddr;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Process configuration, read from `TRIVIA_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_environment(Environment::with_prefix("TRIVIA"))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }

    #[cfg(test)]
    fn from_map(vars: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::from_environment(Environment::with_prefix("TRIVIA").source(Some(source)))
    }
}
