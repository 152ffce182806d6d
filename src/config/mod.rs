use std::env;
use std::fmt;

use thiserror::Error;

/// Process configuration, read once at startup and passed down explicitly.
///
/// Missing required variables fail startup instead of surfacing later as a
/// broken signing key or an unreachable database.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Clone)]
pub struct SecurityConfig {
    pub signing_key: String,
    pub token_ttl_hours: i64,
}

// Keep the signing key out of debug output
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("signing_key", &"***")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let signing_key = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self::defaults(url, signing_key).with_env_overrides())
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECT_TIMEOUT_SECS") {
            self.database.connect_timeout_secs =
                v.parse().unwrap_or(self.database.connect_timeout_secs);
        }

        // Security overrides
        if let Ok(v) = env::var("TOKEN_TTL_HOURS") {
            self.security.token_ttl_hours = v.parse().unwrap_or(self.security.token_ttl_hours);
        }

        self
    }

    fn defaults(url: String, signing_key: String) -> Self {
        Self {
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url,
                max_connections: 10,
                connect_timeout_secs: 30,
            },
            security: SecurityConfig {
                signing_key,
                token_ttl_hours: 12,
            },
        }
    }
}
