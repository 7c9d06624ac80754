use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub allowed_file_extensions: Vec<String>,
    pub default_vat_pct: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5678".to_string(),
            backend_url_production: "https://api.billed.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            allowed_file_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            default_vat_pct: 20,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    /// (build.rs las reenvía desde .env)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BACKEND_URL_DEVELOPMENT" => option_env!("BACKEND_URL_DEVELOPMENT"),
            "BACKEND_URL_PRODUCTION" => option_env!("BACKEND_URL_PRODUCTION"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "ALLOWED_FILE_EXTENSIONS" => option_env!("ALLOWED_FILE_EXTENSIONS"),
            "DEFAULT_VAT_PCT" => option_env!("DEFAULT_VAT_PCT"),
            _ => None,
        })
    }

    /// Construye la configuración a partir de una función de búsqueda.
    /// Valores ausentes o inválidos caen en los defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        Self {
            backend_url_development: lookup("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: lookup("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: lookup("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            allowed_file_extensions: lookup("ALLOWED_FILE_EXTENSIONS")
                .map(|v| {
                    v.split(',')
                        .map(|ext| ext.trim().to_lowercase())
                        .filter(|ext| !ext.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.allowed_file_extensions),
            default_vat_pct: lookup("DEFAULT_VAT_PCT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_vat_pct),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Nivel de log configurado (Info si no se reconoce)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
