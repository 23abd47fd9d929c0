pub mod triplet;

pub use triplet::{Command, InvalidInput, Sentinel};
