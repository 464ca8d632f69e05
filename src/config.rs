use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    ACCESS_TOKEN_KEY, DEFAULT_ACCESS_TOKEN_MAX_AGE_SECS, DEFAULT_API_URL, PASSWORD_RESET_KEY,
    REFRESH_TOKEN_KEY,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// Vida de la cookie del access token (el backend lo expira a los 20 min)
    pub access_token_max_age_secs: u32,
    pub storage_keys: StorageKeys,
}

/// Claves usadas en cookie / localStorage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageKeys {
    pub access_token: String,
    pub refresh_token: String,
    pub password_reset: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            access_token: ACCESS_TOKEN_KEY.to_string(),
            refresh_token: REFRESH_TOKEN_KEY.to_string(),
            password_reset: PASSWORD_RESET_KEY.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            access_token_max_age_secs: DEFAULT_ACCESS_TOKEN_MAX_AGE_SECS,
            storage_keys: StorageKeys::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("BURGER_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            environment: option_env!("BURGER_ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("BURGER_ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("BURGER_LOG_LEVEL")
                .unwrap_or("info")
                .to_string(),
            access_token_max_age_secs: option_env!("BURGER_ACCESS_TOKEN_MAX_AGE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_max_age_secs),
            storage_keys: StorageKeys::default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel para wasm_logger; valores desconocidos caen a Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
