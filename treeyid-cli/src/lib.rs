//! treeyid CLI library
//!
//! Command-line front end for preparing PPCHY treebank files and converting
//! their leaves to Yiddish script.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
