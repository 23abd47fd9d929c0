pub mod cmd;
pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod process;
pub mod session;
pub mod stats;
pub mod store;
