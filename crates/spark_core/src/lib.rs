//! Core domain logic for the Creator Spark registry.
//! This crate is the single source of truth for registry invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::creator::{normalize_handle, same_handle, Creator, CreatorValidationError};
pub use service::queries::{
    select_agenda, select_list, summarize, Agenda, AgendaQuery, ListQuery, ListSort,
    RegistrySummary,
};
pub use service::registry_service::{NewCreator, RegistryError, RegistryResult, RegistryService};
pub use store::{parse_iso_date, CreatorStore, JsonFileStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
