//! maca-cli library
//!
//! Argument parsing and command execution, shared by the `maca` binary and
//! its tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use logger::initialize as initialize_logger;
pub use runner::run;
