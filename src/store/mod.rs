pub mod journal;
pub mod roll;
pub mod roll_log;

pub use journal::{Journal, JournalSink};
pub use roll::Roll;
pub use roll_log::{LogFull, RollLog};
