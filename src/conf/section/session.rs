use crate::store::roll_log::DEFAULT_CAPACITY;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SessionConfigSection {
    pub capacity: Option<usize>,
    pub echo: Option<bool>,
}

impl SessionConfigSection {
    /// Configured capacity, with zero treated as unset.
    pub fn capacity(&self) -> usize {
        self.capacity
            .filter(|cap| *cap > 0)
            .unwrap_or(DEFAULT_CAPACITY)
    }
}
