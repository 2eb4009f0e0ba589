use std::env;

use crate::utils::error::CustomError;

/// Runtime settings read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub app_name: String,
    pub redis_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CustomError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                CustomError::InternalServerError(format!("Invalid PORT value: {}", raw))
            })?,
            Err(_) => 8000,
        };

        Ok(AppConfig {
            host: env::var("HOST").unwrap_or_else(|_| "localhost".to_string()),
            port,
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "rust_blogdb".to_string()),
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "comment_service".to_string()),
            redis_url: env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty()),
        })
    }
}
