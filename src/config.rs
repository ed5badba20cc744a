use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL_DEVELOPMENT: &str = "http://localhost:3333";
const DEFAULT_BACKEND_URL_PRODUCTION: &str = "https://api.fitcare.app";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL_DEVELOPMENT.to_string(),
            backend_url_production: DEFAULT_BACKEND_URL_PRODUCTION.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_BACKEND_URL_DEVELOPMENT)
                .to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or(DEFAULT_BACKEND_URL_PRODUCTION)
                .to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// Obtiene la URL del backend según el entorno actual (sin `/` final)
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel para wasm_logger: con logging desactivado solo quedan warnings y errores
    pub fn log_level(&self) -> log::Level {
        if self.is_logging_enabled() {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_by_environment() {
        let mut config = AppConfig {
            backend_url_development: "http://localhost:3333/".to_string(),
            backend_url_production: "https://api.fitcare.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        };
        assert_eq!(config.backend_url(), "http://localhost:3333");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.fitcare.app");

        // Cualquier otro valor cae en desarrollo
        config.environment = "staging".to_string();
        assert_eq!(config.backend_url(), "http://localhost:3333");
    }

    #[test]
    fn test_log_level_follows_flag() {
        let mut config = AppConfig::default();
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Info);

        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
