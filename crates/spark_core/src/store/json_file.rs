//! JSON file store.
//!
//! # Responsibility
//! - Read and fully rewrite the creator list at one file path.
//! - Seed the default dataset on first use.
//!
//! # Invariants
//! - Writes go to a sibling temp file first and are renamed into place, so a
//!   reader never observes a half-written file.
//! - Output is pretty-printed with 2-space indentation.

use chrono::NaiveDate;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::seed::SEED_DATASET;
use super::wire::{CreatorPayload, StoredCreator};
use super::{CreatorStore, StoreError, StoreResult};
use crate::model::creator::Creator;

/// Store backed by a single JSON array file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dataset(&self) -> StoreResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        write_atomically(&self.path, SEED_DATASET.as_bytes())?;
        info!(
            "event=store_seed module=store status=ok path={}",
            self.path.display()
        );
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CreatorStore for JsonFileStore {
    fn load(&self, today: NaiveDate) -> StoreResult<Vec<Creator>> {
        let started_at = Instant::now();
        self.ensure_dataset()?;

        let raw = fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        let stored: Vec<StoredCreator> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        let creators = stored
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_creator(index, today))
            .collect::<StoreResult<Vec<_>>>();

        match creators {
            Ok(creators) => {
                info!(
                    "event=store_load module=store status=ok count={} duration_ms={}",
                    creators.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(creators)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=invalid_record error={}",
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, creators: &[Creator]) -> StoreResult<()> {
        let started_at = Instant::now();
        let payload: Vec<CreatorPayload<'_>> = creators.iter().map(CreatorPayload::from).collect();
        let json = serde_json::to_string_pretty(&payload).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        if let Err(err) = write_atomically(&self.path, json.as_bytes()) {
            error!(
                "event=store_save module=store status=error error_code=write_failed error={}",
                err
            );
            return Err(err);
        }

        info!(
            "event=store_save module=store status=ok count={} duration_ms={}",
            creators.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

fn write_atomically(path: &Path, content: &[u8]) -> StoreResult<()> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).map_err(io_error)?;
    fs::rename(&temp_path, path).map_err(io_error)?;
    Ok(())
}
