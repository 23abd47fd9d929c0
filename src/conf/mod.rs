mod loader;
mod model;
pub mod section;

pub use loader::{CONFIG_PATH_ENV, load, load_from};
pub use model::{ConfigurationModel, DEFAULT_LOG_PATH, LOG_PATH_ENV};
pub use section::{JournalConfigSection, SessionConfigSection, UiConfigSection};
