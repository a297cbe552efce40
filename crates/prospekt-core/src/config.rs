use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_BASE_URL: &str = "https://www.prospektmaschine.de/";
const DEFAULT_DIRECTORY_PATH: &str = "hypermarkte/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields the stock
/// configuration for the public site.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let base_url = or_default("PROSPEKT_BASE_URL", DEFAULT_BASE_URL);
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "PROSPEKT_BASE_URL".to_string(),
            reason: format!("\"{base_url}\" is not an http(s) URL"),
        });
    }

    let directory_path = or_default("PROSPEKT_DIRECTORY_PATH", DEFAULT_DIRECTORY_PATH);
    let output_dir = PathBuf::from(or_default("PROSPEKT_OUTPUT_DIR", "."));
    let request_timeout_secs = parse_optional_u64("PROSPEKT_REQUEST_TIMEOUT_SECS")?;
    let log_level = or_default("PROSPEKT_LOG_LEVEL", "warn");

    Ok(AppConfig {
        base_url,
        directory_path,
        output_dir,
        request_timeout_secs,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
