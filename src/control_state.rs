//! State machine backing the interactive control loop.

use crate::cmd::triplet;
use crate::conf::UiConfigSection;
use crate::error::DiceLogResult;
use crate::process;
use crate::process::builtin::map::BuiltinMap;
use crate::process::close::CLOSE_CODE;
use crate::session::Session;
use crate::store::RollLog;
use log::info;
use std::io::Write;

/// Printed when input ends without the close command.
pub const END_OF_INPUT_MESSAGE: &str = "可關閉程式";

/// Signals whether the control loop should continue or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading user input.
    CONTINUE,
    /// Terminate the control loop.
    EXIT,
}

/// Shared state that backs the interactive control loop.
pub struct ControlState {
    status: i32,
    prompt: String,
    builtin_map: BuiltinMap,
    session: Session,
}

impl ControlState {
    /// Build a new control state with the default sentinel builtins.
    pub fn new(session: Session) -> Self {
        Self {
            status: 0,
            prompt: UiConfigSection::default().prompt().to_string(),
            builtin_map: BuiltinMap::new(),
            session,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Status of the most recently handled line; zero means success.
    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn rolls(&self) -> &RollLog {
        &self.session.rolls
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Classify and execute a single line of user input.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> DiceLogResult<ControlFlow> {
        let command = triplet::parse(line);
        self.status = process::execute(&mut self.builtin_map, &mut self.session, command, out)?;

        if self.status == CLOSE_CODE {
            Ok(ControlFlow::EXIT)
        } else {
            Ok(ControlFlow::CONTINUE)
        }
    }

    /// Wrap up after input ran out: flush the journal and tell the user.
    pub fn finish(&mut self, out: &mut dyn Write) -> DiceLogResult<()> {
        if self.session.journal.is_open() {
            self.session.journal.close()?;
        }
        info!("input ended after {} rolls", self.session.rolls.len());
        writeln!(out, "{END_OF_INPUT_MESSAGE}")?;
        Ok(())
    }
}
