use std::env;

use crate::domain::EmptyResultPolicy;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Locale for error and log messages ('en' or 'tr')
    pub locale: String,
    pub empty_results: EmptyResultPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://ewallet.db?mode=rwc".to_string(),
            port: 8000,
            cors_allowed_origins: Vec::new(),
            locale: "en".to_string(),
            empty_results: EmptyResultPolicy::Error,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();

        let empty_results_as_error = env::var("EMPTY_RESULTS_AS_ERROR")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
            locale: env::var("LOCALE").unwrap_or(defaults.locale),
            empty_results: EmptyResultPolicy::from_flag(empty_results_as_error),
        }
    }
}
