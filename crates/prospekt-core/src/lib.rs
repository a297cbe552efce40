pub mod app_config;
pub mod brochures;
pub mod config;

pub use app_config::AppConfig;
pub use brochures::{BrochureRecord, ShopRef};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
