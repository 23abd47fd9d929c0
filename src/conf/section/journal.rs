use super::super::model::ConfigurationModel;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct JournalConfigSection {
    pub path: Option<String>,
}

impl JournalConfigSection {
    pub fn resolved_path(&self, config: &ConfigurationModel) -> Option<PathBuf> {
        self.path.as_ref().map(|raw| config.resolve_path(raw))
    }
}
