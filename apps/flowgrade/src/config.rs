use std::path::Path;

use anyhow::Context;
use client_core::DEFAULT_SERVER_URL;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Base name of the optional config file; any format `config` understands works.
pub const DEFAULT_CONFIG_NAME: &str = "flowgrade";
const ENV_PREFIX: &str = "FLOWGRADE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            log_filter: "info".into(),
        }
    }
}

/// Layers defaults, the config file and `FLOWGRADE__*` environment variables.
///
/// An explicit `path` must exist; the default `flowgrade.*` file is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let defaults = Settings::default();
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    Config::builder()
        .set_default("server_url", defaults.server_url)?
        .set_default("log_filter", defaults.log_filter)?
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context("failed to load flowgrade settings")?
        .try_deserialize()
        .context("invalid flowgrade settings")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
