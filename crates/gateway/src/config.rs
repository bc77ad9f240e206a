//! Gateway configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig, TransactionIsolation};

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// HTTP listener
    pub server: ServiceConfig,
    /// Customer store
    pub database: DatabaseConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let server_defaults = ServiceConfig::default();
        let db_defaults = DatabaseConfig::default();

        Self {
            server: ServiceConfig {
                service_name: server_defaults.service_name,
                host: env::var("SERVER_HOST").unwrap_or(server_defaults.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(server_defaults.port),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(db_defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(db_defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(db_defaults.min_connections),
                isolation: isolation_from_env().unwrap_or(db_defaults.isolation),
            },
        }
    }

    /// Override the listener address, e.g. from CLI flags.
    pub fn with_listener(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

fn isolation_from_env() -> Option<TransactionIsolation> {
    let raw = env::var("TRANSACTION_ISOLATION").ok()?;
    match raw.parse() {
        Ok(isolation) => Some(isolation),
        Err(e) => {
            tracing::warn!("Ignoring TRANSACTION_ISOLATION: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_listener() {
        let config = GatewayConfig::default().with_listener(Some("127.0.0.1".into()), Some(8080));

        assert_eq!(config.server.addr(), "127.0.0.1:8080");
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_missing_overrides_keep_defaults() {
        let config = GatewayConfig::default().with_listener(None, None);
        assert_eq!(config.server.addr(), "0.0.0.0:3000");
    }
}
