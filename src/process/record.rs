use crate::error::DiceLogResult;
use crate::session::Session;
use crate::store::journal::format_record;
use crate::store::Roll;
use log::{debug, warn};
use std::io::Write;

pub const FULL_MESSAGE: &str = "紀錄已滿 無法再新增";

/// Append a roll to the journal, then to the session log once the write succeeded.
pub fn record(session: &mut Session, roll: Roll, out: &mut dyn Write) -> DiceLogResult<i32> {
    if session.rolls.is_full() {
        warn!("roll log is full ({} rolls); dropping {roll}", session.rolls.capacity());
        writeln!(out, "{FULL_MESSAGE}")?;
        return Ok(1);
    }

    session.journal.record(session.rolls.len() + 1, &roll)?;
    let ordinal = session.rolls.push(roll)?;
    if session.echo {
        writeln!(out, "{}", format_record(ordinal, &roll))?;
    }
    debug!("recorded roll #{ordinal}: {roll} (sum {})", roll.sum());
    Ok(0)
}
