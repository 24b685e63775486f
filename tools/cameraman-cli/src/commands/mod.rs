pub mod config;
pub mod replay;

use std::path::Path;

use cameraman_common::config::AppConfig;

/// The effective configuration, plus a problem with the standard config
/// file that should be logged once the subscriber is installed.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub warning: Option<String>,
}

/// Load the configuration from an explicit path or the standard location.
///
/// An explicit path must load cleanly. A broken file at the standard
/// location falls back to defaults and is reported through `warning`.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LoadedConfig> {
    match path {
        Some(path) => {
            let config = AppConfig::load_from(path)
                .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?;
            Ok(LoadedConfig {
                config,
                warning: None,
            })
        }
        None => Ok(load_or_default_at(&AppConfig::default_path())),
    }
}

fn load_or_default_at(path: &Path) -> LoadedConfig {
    match AppConfig::load_or_default(path) {
        Ok(config) => LoadedConfig {
            config,
            warning: None,
        },
        Err(e) => LoadedConfig {
            config: AppConfig::default(),
            warning: Some(format!(
                "Failed to load config at {}: {e}; using defaults",
                path.display()
            )),
        },
    }
}
