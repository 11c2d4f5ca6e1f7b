//! Process-wide dataset store.
//!
//! The store is written exactly once, when the dataset finishes loading,
//! and is read-only for the rest of the session. Everything else reaches
//! the records through [`DatasetStore::get`].

use crate::models::Property;
use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Utc};
use std::sync::OnceLock;
use tracing::info;

/// The loaded listing dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Property>,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

/// Set-once holder for a [`Dataset`]
#[derive(Debug, Default)]
pub struct DatasetStore {
    dataset: OnceLock<Dataset>,
}

impl DatasetStore {
    pub const fn new() -> Self {
        Self {
            dataset: OnceLock::new(),
        }
    }

    /// Store the dataset. Fails if one was already stored.
    pub fn set(&self, records: Vec<Property>, source: impl Into<String>) -> Result<&Dataset> {
        let dataset = Dataset {
            records,
            source: source.into(),
            loaded_at: Utc::now(),
        };

        if let Err(rejected) = self.dataset.set(dataset) {
            bail!(
                "dataset already loaded; refusing to replace it with {} records from {}",
                rejected.records.len(),
                rejected.source
            );
        }

        let stored = self
            .get()
            .ok_or_else(|| anyhow!("dataset store empty after set"))?;
        info!(
            "Stored {} properties from {} at {}",
            stored.records.len(),
            stored.source,
            stored.loaded_at
        );
        Ok(stored)
    }

    pub fn get(&self) -> Option<&Dataset> {
        self.dataset.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }
}

static GLOBAL: DatasetStore = DatasetStore::new();

/// The store shared by the whole process
pub fn global() -> &'static DatasetStore {
    &GLOBAL
}
