//! Registry use-case service.
//!
//! # Responsibility
//! - Provide list/summary/add/boost/agenda entry points for CLI callers.
//! - Load through the store, apply pure queries, persist on mutation.
//!
//! # Invariants
//! - Handles stay unique under case-insensitive comparison.
//! - Read-only operations never write the store.
//! - Every mutation is followed by a full `save`.

use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::creator::{normalize_handle, Creator, CreatorValidationError};
use crate::service::queries::{
    select_agenda, select_list, summarize, Agenda, AgendaQuery, ListQuery, RegistrySummary,
};
use crate::store::{CreatorStore, StoreError};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Service error for registry use-cases.
#[derive(Debug)]
pub enum RegistryError {
    /// `add` was given a handle that already exists (any case).
    DuplicateHandle(String),
    /// `boost` was given a handle that is not tracked.
    UnknownHandle(String),
    /// New record failed model validation.
    Validation(CreatorValidationError),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateHandle(handle) => write!(f, "Handle {handle} already exists."),
            Self::UnknownHandle(handle) => {
                write!(f, "No creator named {handle} in the registry.")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::DuplicateHandle(_) | Self::UnknownHandle(_) => None,
        }
    }
}

impl From<StoreError> for RegistryError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<CreatorValidationError> for RegistryError {
    fn from(value: CreatorValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Request model for adding a creator.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCreator {
    /// Raw handle; normalized before use.
    pub handle: String,
    pub platform: String,
    pub category: String,
    pub note: String,
    pub heat: f64,
    /// Defaults to today.
    pub last_seen: Option<NaiveDate>,
    /// Defaults to today.
    pub last_boosted: Option<NaiveDate>,
}

/// Use-case service over a creator store, pinned to one `today`.
pub struct RegistryService<S: CreatorStore> {
    store: S,
    today: NaiveDate,
}

impl<S: CreatorStore> RegistryService<S> {
    pub fn new(store: S, today: NaiveDate) -> Self {
        Self { store, today }
    }

    /// The date all staleness values are computed against.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Lists creators matching `query`.
    pub fn list(&self, query: &ListQuery) -> RegistryResult<Vec<Creator>> {
        let creators = self.store.load(self.today)?;
        Ok(select_list(creators, query, self.today))
    }

    /// Summarizes the registry; `None` when no creators are tracked.
    pub fn summary(&self) -> RegistryResult<Option<RegistrySummary>> {
        let creators = self.store.load(self.today)?;
        Ok(summarize(&creators, self.today))
    }

    /// Lists creators due for a boost.
    pub fn agenda(&self, query: &AgendaQuery) -> RegistryResult<Agenda> {
        let creators = self.store.load(self.today)?;
        Ok(select_agenda(creators, query, self.today))
    }

    /// Appends a new creator and persists the list.
    ///
    /// # Errors
    /// - `DuplicateHandle` when the normalized handle already exists.
    /// - `Validation` when the record is malformed.
    pub fn add(&self, request: NewCreator) -> RegistryResult<Creator> {
        let mut creators = self.store.load(self.today)?;
        let handle = normalize_handle(&request.handle);

        if creators.iter().any(|existing| existing.has_handle(&handle)) {
            warn!(
                "event=creator_add module=service status=rejected error_code=duplicate_handle handle={}",
                handle
            );
            return Err(RegistryError::DuplicateHandle(handle));
        }

        let creator = Creator {
            handle,
            platform: request.platform,
            category: request.category,
            note: request.note,
            heat: request.heat,
            last_seen: request.last_seen.unwrap_or(self.today),
            last_boosted: request.last_boosted.unwrap_or(self.today),
        };
        creator.validate()?;

        creators.push(creator.clone());
        self.store.save(&creators)?;
        info!(
            "event=creator_add module=service status=ok handle={} count={}",
            creator.handle,
            creators.len()
        );
        Ok(creator)
    }

    /// Logs a boost for `handle` today, optionally replacing the note.
    ///
    /// # Errors
    /// - `UnknownHandle` when no creator matches the normalized handle.
    pub fn boost(&self, handle: &str, note: Option<&str>) -> RegistryResult<Creator> {
        let mut creators = self.store.load(self.today)?;
        let handle = normalize_handle(handle);

        let Some(creator) = creators
            .iter_mut()
            .find(|existing| existing.has_handle(&handle))
        else {
            warn!(
                "event=creator_boost module=service status=rejected error_code=unknown_handle handle={}",
                handle
            );
            return Err(RegistryError::UnknownHandle(handle));
        };

        creator.record_boost(self.today, note);
        let boosted = creator.clone();
        self.store.save(&creators)?;
        info!(
            "event=creator_boost module=service status=ok handle={}",
            boosted.handle
        );
        Ok(boosted)
    }
}
