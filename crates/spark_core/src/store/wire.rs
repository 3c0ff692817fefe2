//! On-disk JSON shape for creator records.
//!
//! # Invariants
//! - Absent `category`/`note` read as empty strings, absent `heat` as 0.
//! - Absent or empty dates read as the caller's `today`.
//! - Heat is rounded to 2 decimals on write.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{StoreError, StoreResult};
use crate::model::creator::Creator;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Record as read from disk; everything is optional so missing fields can be
/// reported with their record index.
#[derive(Debug, Deserialize)]
pub(super) struct StoredCreator {
    #[serde(default)]
    handle: Option<String>,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    heat: Option<f64>,
    #[serde(default)]
    last_seen: Option<String>,
    #[serde(default)]
    last_boosted: Option<String>,
}

/// Record as written to disk.
#[derive(Debug, Serialize)]
pub(super) struct CreatorPayload<'a> {
    handle: &'a str,
    platform: &'a str,
    category: &'a str,
    note: &'a str,
    heat: f64,
    last_seen: String,
    last_boosted: String,
}

impl StoredCreator {
    pub(super) fn into_creator(self, index: usize, today: NaiveDate) -> StoreResult<Creator> {
        let handle = self.handle.ok_or(StoreError::MissingField {
            index,
            field: "handle",
        })?;
        let platform = self.platform.ok_or(StoreError::MissingField {
            index,
            field: "platform",
        })?;

        Ok(Creator {
            handle,
            platform,
            category: self.category.unwrap_or_default(),
            note: self.note.unwrap_or_default(),
            heat: self.heat.unwrap_or(0.0),
            last_seen: coerce_date(self.last_seen, index, "last_seen", today)?,
            last_boosted: coerce_date(self.last_boosted, index, "last_boosted", today)?,
        })
    }
}

impl<'a> From<&'a Creator> for CreatorPayload<'a> {
    fn from(creator: &'a Creator) -> Self {
        Self {
            handle: &creator.handle,
            platform: &creator.platform,
            category: &creator.category,
            note: &creator.note,
            heat: round_heat(creator.heat),
            last_seen: creator.last_seen.format(DATE_FORMAT).to_string(),
            last_boosted: creator.last_boosted.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Parses an ISO date, or the date part of an ISO date-time.
///
/// Returns `None` when `value` is neither.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.date_naive())
}

fn coerce_date(
    value: Option<String>,
    index: usize,
    field: &'static str,
    today: NaiveDate,
) -> StoreResult<NaiveDate> {
    match value {
        None => Ok(today),
        Some(text) if text.trim().is_empty() => Ok(today),
        Some(text) => parse_iso_date(&text).ok_or(StoreError::InvalidDate {
            index,
            field,
            value: text,
        }),
    }
}

// Why: `{:.2}` rounds the exact binary value and sends exact ties to even,
// so stored heat matches files written by earlier tooling.
fn round_heat(heat: f64) -> f64 {
    format!("{heat:.2}").parse().unwrap_or(heat)
}

#[cfg(test)]
mod tests {
    use super::{parse_iso_date, round_heat, StoredCreator};
    use crate::store::StoreError;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).expect("valid date")
    }

    #[test]
    fn parse_iso_date_accepts_dates_and_datetimes() {
        let expected = NaiveDate::from_ymd_opt(2026, 2, 12);
        assert_eq!(parse_iso_date("2026-02-12"), expected);
        assert_eq!(parse_iso_date("2026-02-12T08:30:00"), expected);
        assert_eq!(parse_iso_date("2026-02-12 08:30:00.250"), expected);
        assert_eq!(parse_iso_date("2026-02-12T08:30:00+02:00"), expected);
        assert_eq!(parse_iso_date("12/02/2026"), None);
        assert_eq!(parse_iso_date("2026-02-30"), None);
    }

    #[test]
    fn round_heat_keeps_two_decimals() {
        assert_eq!(round_heat(0.876), 0.88);
        assert_eq!(round_heat(0.874), 0.87);
        assert_eq!(round_heat(1.5), 1.5);
    }

    #[test]
    fn round_heat_sends_exact_ties_to_even() {
        assert_eq!(round_heat(0.125), 0.12);
        assert_eq!(round_heat(0.375), 0.38);
        assert_eq!(round_heat(0.625), 0.62);
        assert_eq!(round_heat(0.875), 0.88);
        assert_eq!(round_heat(0.815), 0.81);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let stored: StoredCreator =
            serde_json::from_str(r#"{"handle": "@quiet", "platform": "Bluesky"}"#).expect("fixture should be valid JSON");
        let creator = stored.into_creator(0, today()).expect("record should convert");

        assert_eq!(creator.category, "");
        assert_eq!(creator.note, "");
        assert_eq!(creator.heat, 0.0);
        assert_eq!(creator.last_seen, today());
        assert_eq!(creator.last_boosted, today());
    }

    #[test]
    fn missing_handle_reports_record_index() {
        let stored: StoredCreator = serde_json::from_str(r#"{"platform": "X"}"#).expect("fixture should be valid JSON");
        let err = stored.into_creator(4, today()).expect_err("record should be rejected");
        assert!(matches!(
            err,
            StoreError::MissingField {
                index: 4,
                field: "handle"
            }
        ));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let stored: StoredCreator = serde_json::from_str(
            r#"{"handle": "@a", "platform": "X", "last_boosted": "last tuesday"}"#,
        )
        .expect("fixture should be valid JSON");
        let err = stored.into_creator(1, today()).expect_err("record should be rejected");
        assert!(matches!(
            err,
            StoreError::InvalidDate {
                index: 1,
                field: "last_boosted",
                ..
            }
        ));
    }
}
