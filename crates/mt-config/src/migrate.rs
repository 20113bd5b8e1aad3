//! Schema migration framework.

use crate::ConfigError;
use crate::schema::Config;
use mt_transport::TransportModel;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut config: Config) -> Result<Config, ConfigError> {
    while config.version < LATEST_VERSION {
        config = migrate_one_version(config)?;
    }
    Ok(config)
}

fn migrate_one_version(config: Config) -> Result<Config, ConfigError> {
    match config.version {
        0 => migrate_v0_to_v1(config),
        v => Err(ConfigError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 named the closure under `transport.closure` as free text
/// ("unity-lewis", "mix", ...). Version 1 stores the canonical label in
/// `transport.model`.
fn migrate_v0_to_v1(mut config: Config) -> Result<Config, ConfigError> {
    if let Some(closure) = config.transport.closure.take() {
        if !config.transport.model.is_empty() {
            return Err(ConfigError::Migration {
                what: "both transport.closure and transport.model are set".to_string(),
            });
        }
        let model: TransportModel = closure.parse()?;
        config.transport.model = model.label().to_string();
    }
    config.version = 1;
    Ok(config)
}
