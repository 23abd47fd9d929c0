use super::model::ConfigurationModel;
use super::model::expand_home;
use log::{debug, warn};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "DICELOG_CONFIG";

/// Load the user's configuration file, falling back to defaults when absent or invalid.
pub fn load() -> ConfigurationModel {
    match resolve_config_path() {
        Some(path) => load_from(&path),
        None => {
            debug!("no configuration file found, using defaults");
            ConfigurationModel::default()
        }
    }
}

/// Load a specific configuration file, falling back to defaults on any problem.
pub fn load_from(path: &Path) -> ConfigurationModel {
    match fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(mut cfg) => {
                cfg.set_source_path(path.to_path_buf());
                debug!("loaded configuration from {}", path.display());
                return cfg;
            }
            Err(err) => {
                warn!("unable to parse config file '{}': {err}", path.display());
            }
        },
        Err(err) => {
            warn!("unable to read config file '{}': {err}", path.display());
        }
    }

    ConfigurationModel::default()
}

/// `DICELOG_CONFIG` when set, otherwise `~/.dicelogrc` if it exists.
fn resolve_config_path() -> Option<PathBuf> {
    let from_env = env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| expand_home(&raw).unwrap_or_else(|| PathBuf::from(raw)));

    from_env.or_else(|| expand_home("~/.dicelogrc").filter(|path| path.exists()))
}

fn parse(contents: &str) -> Result<ConfigurationModel, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(ConfigurationModel::default());
    }
    serde_yaml::from_str(contents)
}
