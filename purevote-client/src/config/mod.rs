use client_core::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    /// Identity backend settings. `None` when the backend is not
    /// configured; the auth surface then runs in demo mode.
    pub identity: Option<IdentitySettings>,
    /// Where the theme preference is persisted.
    pub theme_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct IdentitySettings {
    pub api_url: String,
    pub api_key: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let identity = match (env::var("IDENTITY_API_URL"), env::var("IDENTITY_API_KEY")) {
            (Ok(api_url), Ok(api_key)) => Some(IdentitySettings { api_url, api_key }),
            _ => None,
        };

        Ok(ClientConfig {
            service_name: get_env("SERVICE_NAME", "purevote-client"),
            service_version: get_env("SERVICE_VERSION", env!("CARGO_PKG_VERSION")),
            log_level: get_env("LOG_LEVEL", "info"),
            identity,
            theme_path: PathBuf::from(get_env("THEME_PATH", ".purevote/theme.json")),
        })
    }
}

fn get_env(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
