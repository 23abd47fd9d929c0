//! Handling of classified input: recording rolls and running sentinel builtins.

pub mod builtin;
pub mod close;
pub mod help;
pub mod history;
pub mod record;

use crate::cmd::Command;
use crate::error::DiceLogResult;
use crate::process::builtin::map::BuiltinMap;
use crate::session::Session;
use log::{debug, info};
use std::io::Write;

pub const INVALID_MESSAGE: &str = "輸入錯誤 重新輸入";

/// Execute a classified command against the session, returning its status.
pub fn execute(
    builtin_map: &mut BuiltinMap,
    session: &mut Session,
    command: Command,
    out: &mut dyn Write,
) -> DiceLogResult<i32> {
    match command {
        Command::Empty => Ok(0),
        Command::Roll(roll) => record::record(session, roll, out),
        Command::Sentinel(sentinel) => {
            info!("running {sentinel:?} command");
            match builtin_map.invoke(sentinel, session, out) {
                Some(result) => result,
                None => reject(out, &format!("{sentinel:?} is not registered")),
            }
        }
        Command::Invalid(reason) => reject(out, &format!("{reason:?}")),
    }
}

fn reject(out: &mut dyn Write, reason: &str) -> DiceLogResult<i32> {
    debug!("rejected input: {reason}");
    writeln!(out, "{INVALID_MESSAGE}")?;
    Ok(1)
}
