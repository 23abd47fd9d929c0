use crate::conf::ConfigurationModel;
use crate::control_state::{ControlFlow, ControlState};
use crate::error::DiceLogResult;
use crate::process::help::show_instructions;
use crate::session::Session;
use crate::store::Journal;
use log::{error, info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of input lines for the control loop.
pub trait LineEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError>;
    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool>;
}

impl LineEditor for DefaultEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        DefaultEditor::readline(self, prompt)
    }

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool> {
        DefaultEditor::add_history_entry(self, entry)
    }
}

/// Line editor over any buffered reader, used when stdin is not a terminal.
pub struct StdinEditor<R> {
    reader: R,
}

impl<R: BufRead> StdinEditor<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineEditor for StdinEditor<R> {
    fn readline(&mut self, _prompt: &str) -> Result<String, ReadlineError> {
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Err(ReadlineError::Eof);
        }
        // Undecodable bytes become U+FFFD so the line is rejected like any other bad input.
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn add_history_entry(&mut self, _entry: &str) -> rustyline::Result<bool> {
        Ok(false)
    }
}

/// Open the journal, print the instructions and process stdin until it ends or is closed.
pub fn control_loop(config: &ConfigurationModel) -> DiceLogResult<()> {
    let journal = Journal::create(&config.journal_path())?;
    let session = Session::with_settings(journal, &config.session);
    let mut control_state = ControlState::new(session).with_prompt(config.ui.prompt());

    let mut stdout = io::stdout();
    show_instructions(&mut stdout)?;

    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut editor = DefaultEditor::new()?;
        run_loop_with_editor(&mut control_state, &mut editor, &mut stdout)
    } else {
        let mut editor = StdinEditor::new(stdin.lock());
        run_loop_with_editor(&mut control_state, &mut editor, &mut stdout)
    }
}

/// Drive the control state with lines from `editor`, writing console output to `sink`.
pub fn run_loop_with_editor<E, W>(
    control_state: &mut ControlState,
    editor: &mut E,
    sink: &mut W,
) -> DiceLogResult<()>
where
    E: LineEditor + ?Sized,
    W: Write,
{
    loop {
        sink.flush()?;

        match editor.readline(control_state.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(&line)?;
                }

                let flow = control_state.handle_line(&line, sink)?;
                if flow == ControlFlow::EXIT {
                    sink.flush()?;
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) => {
                info!("interrupted, finishing session");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                error!("unable to read input: {err}");
                return Err(err.into());
            }
        }
    }

    control_state.finish(sink)?;
    sink.flush()?;
    Ok(())
}
