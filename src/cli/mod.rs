//! CLI command handlers
//!
//! This module bridges the clap argument parsing in `main` with the envelope
//! and batch layers.

pub mod file;
pub mod value;

pub use file::{handle_file_command, FileCommands};
pub use value::{handle_open_command, handle_seal_command};
