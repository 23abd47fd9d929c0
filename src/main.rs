use dicelog::error::DiceLogError;
use dicelog::{conf, control};
use env_logger::Env;
use std::process::ExitCode;

/// Entry point that starts the control loop.
fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("dicelog=warn")).init();

    let config = conf::load();
    match control::control_loop(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ DiceLogError::OpenLog { .. }) => {
            println!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("dicelog: {err}");
            ExitCode::FAILURE
        }
    }
}
