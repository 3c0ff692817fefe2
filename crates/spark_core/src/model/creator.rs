//! Creator domain model.
//!
//! # Responsibility
//! - Define the canonical creator record tracked by the registry.
//! - Provide handle normalization and staleness derivation.
//!
//! # Invariants
//! - `handle` always starts with `@` once normalized.
//! - Handles are compared case-insensitively; the stored casing is kept.
//! - `heat` has no enforced range, but must be finite.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HANDLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@\S+$").expect("valid handle regex"));

/// Validation errors for creator records.
#[derive(Debug, Clone, PartialEq)]
pub enum CreatorValidationError {
    /// Handle is empty after trimming and prefixing.
    EmptyHandle,
    /// Handle does not match `@<non-whitespace>`.
    InvalidHandle(String),
    /// Heat is NaN or infinite and cannot be stored as JSON.
    NonFiniteHeat(f64),
}

impl Display for CreatorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyHandle => write!(f, "handle cannot be empty"),
            Self::InvalidHandle(handle) => write!(
                f,
                "invalid handle `{handle}`; expected `@` followed by non-whitespace characters"
            ),
            Self::NonFiniteHeat(heat) => write!(f, "heat must be a finite number, got {heat}"),
        }
    }
}

impl Error for CreatorValidationError {}

/// A tracked creator.
#[derive(Debug, Clone, PartialEq)]
pub struct Creator {
    /// Normalized `@handle`, unique under case-insensitive comparison.
    pub handle: String,
    pub platform: String,
    pub category: String,
    /// Free-text focus note shown in list and agenda views.
    pub note: String,
    /// Momentum score, nominally 0..1.
    pub heat: f64,
    /// Last day the creator was seen posting.
    pub last_seen: NaiveDate,
    /// Last day the creator was boosted.
    pub last_boosted: NaiveDate,
}

impl Creator {
    /// Whole days elapsed since the last boost, relative to `today`.
    ///
    /// Negative when `last_boosted` lies in the future.
    pub fn staleness_days(&self, today: NaiveDate) -> i64 {
        (today - self.last_boosted).num_days()
    }

    /// Returns whether this record's handle matches `handle` ignoring case.
    pub fn has_handle(&self, handle: &str) -> bool {
        same_handle(&self.handle, handle)
    }

    /// Marks the creator as boosted on `today`, replacing the note when a
    /// non-empty one is provided.
    pub fn record_boost(&mut self, today: NaiveDate, note: Option<&str>) {
        self.last_boosted = today;
        if let Some(note) = note.filter(|value| !value.is_empty()) {
            self.note = note.to_string();
        }
    }

    /// Validates handle shape and heat finiteness.
    ///
    /// # Errors
    /// - `EmptyHandle` when the handle is just `@` or empty.
    /// - `InvalidHandle` when the handle lacks `@` or contains whitespace.
    /// - `NonFiniteHeat` when heat is NaN or infinite.
    pub fn validate(&self) -> Result<(), CreatorValidationError> {
        if self.handle.trim_start_matches('@').is_empty() {
            return Err(CreatorValidationError::EmptyHandle);
        }
        if !HANDLE_RE.is_match(&self.handle) {
            return Err(CreatorValidationError::InvalidHandle(self.handle.clone()));
        }
        if !self.heat.is_finite() {
            return Err(CreatorValidationError::NonFiniteHeat(self.heat));
        }
        Ok(())
    }
}

/// Trims `raw` and ensures it starts with `@`.
pub fn normalize_handle(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('@') {
        trimmed.to_string()
    } else {
        format!("@{trimmed}")
    }
}

/// Case-insensitive handle equality.
pub fn same_handle(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}
