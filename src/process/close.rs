use crate::error::DiceLogResult;
use crate::process::builtin::Builtin;
use crate::session::Session;
use std::io::Write;

/// Status that tells the control loop to stop.
pub const CLOSE_CODE: i32 = 1000;

pub const CLOSED_MESSAGE: &str = "檔案完成寫入";

/// Flushes and closes the journal, then asks the loop to terminate.
pub struct Close {}

impl Builtin for Close {
    fn call(&mut self, session: &mut Session, out: &mut dyn Write) -> DiceLogResult<i32> {
        session.journal.close()?;
        writeln!(out, "{CLOSED_MESSAGE}")?;
        Ok(CLOSE_CODE)
    }
}

impl Close {
    pub fn new() -> Self {
        Close {}
    }
}
