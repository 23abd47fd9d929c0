pub mod map;

use crate::cmd::Sentinel;
use crate::error::DiceLogResult;
use crate::session::Session;
use std::io::Write;

pub const BUILTIN_SENTINELS: [Sentinel; 3] = [Sentinel::History, Sentinel::Help, Sentinel::Close];

pub trait Builtin {
    fn call(&mut self, session: &mut Session, out: &mut dyn Write) -> DiceLogResult<i32>;
}
