use crate::store::LogFull;
use rustyline::error::ReadlineError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiceLogError {
    #[error("無法建立紀錄檔 {}: {source}", path.display())]
    OpenLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dice log I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Full(#[from] LogFull),
    #[error("journal is already closed")]
    JournalClosed,
    #[error("line editor failure: {0}")]
    Readline(#[from] ReadlineError),
}

pub type DiceLogResult<T> = Result<T, DiceLogError>;
