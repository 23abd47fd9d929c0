use super::section::{JournalConfigSection, SessionConfigSection, UiConfigSection};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const LOG_PATH_ENV: &str = "DICELOG_LOG_PATH";
pub const DEFAULT_LOG_PATH: &str = "dice_log.txt";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigurationModel {
    #[serde(default)]
    pub journal: JournalConfigSection,
    #[serde(default)]
    pub session: SessionConfigSection,
    #[serde(default)]
    pub ui: UiConfigSection,
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

impl ConfigurationModel {
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub(crate) fn set_source_path(&mut self, path: PathBuf) {
        self.source_path = Some(path);
    }

    /// Resolve a configured path: `~` is the home directory, relative paths
    /// sit next to the config file they came from.
    pub fn resolve_path(&self, raw: &str) -> PathBuf {
        if let Some(expanded) = expand_home(raw) {
            return expanded;
        }

        let path = PathBuf::from(raw);
        match self.source_path.as_ref().and_then(|p| p.parent()) {
            Some(parent) if path.is_relative() => parent.join(path),
            _ => path,
        }
    }

    /// Journal location: environment override, then config, then the working directory default.
    pub fn journal_path(&self) -> PathBuf {
        if let Some(env_path) = env::var_os(LOG_PATH_ENV) {
            if !env_path.is_empty() {
                let raw = env_path.to_string_lossy().into_owned();
                return expand_home(&raw).unwrap_or_else(|| PathBuf::from(env_path));
            }
        }

        self.journal
            .resolved_path(self)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH))
    }
}

/// Expand `~` or `~/rest` against the home directory; `None` for any other path
/// or when no home directory is known.
pub(crate) fn expand_home(raw: &str) -> Option<PathBuf> {
    let rest = raw.strip_prefix('~')?;
    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)?;
    match rest.strip_prefix('/') {
        Some(rest) => Some(home.join(rest)),
        None if rest.is_empty() => Some(home),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_follow_the_config_file() {
        let mut cfg = ConfigurationModel::default();
        assert_eq!(cfg.resolve_path("rolls.txt"), PathBuf::from("rolls.txt"));

        cfg.set_source_path(PathBuf::from("/etc/dicelog/config.yaml"));
        assert_eq!(cfg.resolve_path("rolls.txt"), PathBuf::from("/etc/dicelog/rolls.txt"));
        assert_eq!(cfg.resolve_path("/var/log/dice.txt"), PathBuf::from("/var/log/dice.txt"));
    }

    #[test]
    fn only_leading_tilde_segments_expand() {
        assert_eq!(expand_home("rolls.txt"), None);
        assert_eq!(expand_home("~someone/rolls.txt"), None);
        if let Some(home) = env::var_os("HOME").map(PathBuf::from) {
            assert_eq!(expand_home("~"), Some(home.clone()));
            assert_eq!(expand_home("~/logs/dice.txt"), Some(home.join("logs/dice.txt")));
        }
    }
}
