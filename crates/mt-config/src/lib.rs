//! mt-config: configuration file format, validation and session setup.

pub mod migrate;
pub mod schema;
pub mod session;
pub mod units;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use session::{Session, build_session};
pub use units::{Quantity, UnitError, parse_quantity};
pub use validate::{ValidationError, validate_config};

use mt_phase::PhaseError;
use mt_transport::TransportError;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    #[error("Phase error: {0}")]
    Phase(#[from] PhaseError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    let mut config: Config = serde_yaml::from_str(&content)?;
    config = migrate_to_latest(config)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn save_yaml(path: &std::path::Path, config: &Config) -> ConfigResult<()> {
    validate_config(config)?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    let mut config: Config = serde_json::from_str(&content)?;
    config = migrate_to_latest(config)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn save_json(path: &std::path::Path, config: &Config) -> ConfigResult<()> {
    validate_config(config)?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by file extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &std::path::Path) -> ConfigResult<Config> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
