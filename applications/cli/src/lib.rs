//! TechNotes CLI
//!
//! Loads entity snapshots exported from the notes service and prints the same
//! list views the dashboard shows, for a given acting user.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod snapshot;

pub use config::CliConfig;
pub use error::{CliError, Result};
