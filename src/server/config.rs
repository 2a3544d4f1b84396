use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Allowed CORS origins; `*` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok()).map_err(AppError::from)
    }

    /// Builds the configuration from any variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url,
            host,
            port,
            cors_origins,
        })
    }

    /// Socket address the server listens on.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let address = format!("{}:{}", self.host, self.port);
        address.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
            name: "HOST".to_string(),
            value: self.host.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = config_from(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8001);
        assert_eq!(config.cors_origins, vec!["*"]);
    }

    #[test]
    fn requires_database_url() {
        let err = config_from(&[]).err().unwrap();
        assert!(matches!(err, ConfigError::MissingEnvVar(name) if name == "DATABASE_URL"));
    }

    #[test]
    fn rejects_invalid_port() {
        let err = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("PORT", "80000")])
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::InvalidEnvVar { name, .. } if name == "PORT"));
    }

    #[test]
    fn splits_cors_origins() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("CORS_ORIGINS", "http://localhost:3000, https://maverick.example.com"),
        ])
        .unwrap();

        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://maverick.example.com"]
        );
    }

    #[test]
    fn builds_bind_address() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
        ])
        .unwrap();

        assert_eq!(config.bind_address().unwrap().port(), 9000);
    }
}
