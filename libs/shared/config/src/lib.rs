use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub jwt_expiration_minutes: i64,
    pub server_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_URL not set, using default");
                    "sqlite://polyclinic.db?mode=rwc".to_string()
                }),
            database_max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 5),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("JWT_SECRET not set, using empty value");
                    String::new()
                }),
            jwt_issuer: env::var("JWT_ISSUER")
                .unwrap_or_else(|_| {
                    warn!("JWT_ISSUER not set, using default");
                    "polyclinic-api".to_string()
                }),
            jwt_audience: env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| {
                    warn!("JWT_AUDIENCE not set, using default");
                    "polyclinic-clients".to_string()
                }),
            jwt_expiration_minutes: parse_or("JWT_EXPIRATION_MINUTES", 2),
            server_port: parse_or("SERVER_PORT", 3000),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.database_url.is_empty()
            && !self.jwt_secret.is_empty()
    }
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", key, default);
            default
        }
    }
}
