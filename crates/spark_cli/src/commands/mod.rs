//! Subcommand argument types and handlers.

pub mod add;
pub mod agenda;
pub mod boost;
pub mod list;
pub mod summary;

use spark_core::{JsonFileStore, RegistryService};

/// Service handle every command runs against.
pub type Registry = RegistryService<JsonFileStore>;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
