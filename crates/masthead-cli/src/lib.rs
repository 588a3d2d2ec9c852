//! Masthead CLI library.
//!
//! This library provides the command-line front end for the Masthead
//! publication graph: command parsing, an interactive REPL, a script runner,
//! configuration management and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod repl;
pub mod script;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
