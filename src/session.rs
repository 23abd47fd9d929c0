use crate::conf::SessionConfigSection;
use crate::store::{Journal, RollLog};

/// Everything a running session mutates: the in-memory rolls and the journal.
pub struct Session {
    pub rolls: RollLog,
    pub journal: Journal,
    pub echo: bool,
}

impl Session {
    pub fn new(journal: Journal) -> Self {
        Self {
            rolls: RollLog::new(),
            journal,
            echo: false,
        }
    }

    pub fn with_settings(journal: Journal, settings: &SessionConfigSection) -> Self {
        Self {
            rolls: RollLog::with_capacity(settings.capacity()),
            journal,
            echo: settings.echo.unwrap_or(false),
        }
    }
}
