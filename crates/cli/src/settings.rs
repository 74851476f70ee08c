//! Store settings loading
//!
//! Precedence (lowest first): built-in defaults, optional config file,
//! `JOBBOARD_*` environment variables, `--uri` flag.

use config::{Config, Environment, File};
use jobboard_core::{AppError, Result, StoreConfig};
use std::path::Path;

pub const ENV_PREFIX: &str = "JOBBOARD";

pub fn load_store_config(path: Option<&Path>, uri_override: Option<&str>) -> Result<StoreConfig> {
    load_with_env(path, uri_override, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env(
    path: Option<&Path>,
    uri_override: Option<&str>,
    env: Environment,
) -> Result<StoreConfig> {
    let defaults = StoreConfig::default();

    let mut builder = Config::builder()
        .set_default("uri", defaults.uri)
        .and_then(|b| b.set_default("database", defaults.database))
        .and_then(|b| b.set_default("collection", defaults.collection))
        .and_then(|b| b.set_default("connect_timeout_secs", defaults.connect_timeout_secs))
        .and_then(|b| b.set_default("operation_timeout_secs", defaults.operation_timeout_secs))
        .map_err(config_error)?;

    if let Some(path) = path {
        builder = builder.add_source(File::from(path));
    }

    builder = builder.add_source(env.try_parsing(true));

    if let Some(uri) = uri_override {
        builder = builder.set_override("uri", uri).map_err(config_error)?;
    }

    let store_config: StoreConfig = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(config_error)?;

    store_config.validate()?;
    tracing::debug!(
        database = %store_config.database,
        collection = %store_config.collection,
        "Store config loaded"
    );

    Ok(store_config)
}

fn config_error(err: config::ConfigError) -> AppError {
    AppError::Config(err.to_string())
}
