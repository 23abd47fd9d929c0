use serde::Deserialize;

pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfigSection {
    pub prompt: Option<String>,
}

impl UiConfigSection {
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }
}
