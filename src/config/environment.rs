//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto; un valor presente pero mal formado es error.

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Result};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub log_level: tracing::Level,
    pub seed_sample_data: bool,
    pub nominatim_url: String,
    pub geocoding_user_agent: String,
    pub geocoding_limit: u8,
    pub geocoding_timeout_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: tracing::Level::INFO,
            seed_sample_data: true,
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            geocoding_user_agent: "transport-routes/0.1".to_string(),
            geocoding_limit: 5,
            geocoding_timeout_secs: 10,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del proceso (después de `dotenvy::dotenv()`)
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: parse_var("LOG_LEVEL", defaults.log_level)?,
            seed_sample_data: parse_var("SEED_SAMPLE_DATA", defaults.seed_sample_data)?,
            nominatim_url: env::var("NOMINATIM_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.nominatim_url),
            geocoding_user_agent: env::var("GEOCODING_USER_AGENT")
                .unwrap_or(defaults.geocoding_user_agent),
            geocoding_limit: parse_var("GEOCODING_LIMIT", defaults.geocoding_limit)?,
            geocoding_timeout_secs: parse_var(
                "GEOCODING_TIMEOUT_SECS",
                defaults.geocoding_timeout_secs,
            )?,
        })
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} must be a valid value: {}", key, e)),
        _ => Ok(default),
    }
}
