use crate::error::DiceLogResult;
use crate::process::builtin::Builtin;
use crate::session::Session;
use crate::stats::{self, Summary};
use crate::store::Roll;
use std::io::Write;

pub const HISTORY_HEADING: &str = "歷史紀錄:";

/// Lists every roll of the session in the order it was entered.
pub struct History {}

impl Builtin for History {
    fn call(&mut self, session: &mut Session, out: &mut dyn Write) -> DiceLogResult<i32> {
        writeln!(out, "{HISTORY_HEADING}")?;
        for (i, roll) in session.rolls.iter().enumerate() {
            writeln!(out, "{}", format_entry(i + 1, roll))?;
        }
        writeln!(out, "{}", Summary::from_rolls(session.rolls.iter()))?;
        Ok(0)
    }
}

impl History {
    pub fn new() -> Self {
        History {}
    }
}

/// `第2個是 2 5 6  大 13`
pub fn format_entry(ordinal: usize, roll: &Roll) -> String {
    format!("第{ordinal}個是 {roll}  {}", stats::label(roll))
}
