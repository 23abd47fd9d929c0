mod journal;
mod session;
mod ui;

pub use journal::JournalConfigSection;
pub use session::SessionConfigSection;
pub use ui::UiConfigSection;
