//! In-memory hook catalog.
//!
//! Holds the validated records behind an `Arc<[HookRecord]>` together with
//! an id index and a version token. The token is unique per load within a
//! process, so views memoized against one catalog are never reused for
//! another.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use hookhub_core::{HookCategory, HookId, HookRecord};
use tracing::debug;

use crate::engine::{CategoryFilter, filter_and_sort};
use crate::errors::{CatalogError, Result};
use crate::loader::{self, DatasetSource};

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// Read-only collection of hook records.
#[derive(Clone, Debug)]
pub struct HookCatalog {
    records: Arc<[HookRecord]>,
    index: Arc<HashMap<HookId, usize>>,
    version: u64,
}

impl HookCatalog {
    /// Build a catalog from records, validating ids and hook types.
    pub fn from_records(records: Vec<HookRecord>) -> Result<Self> {
        loader::validate(&records)?;
        let index: HashMap<HookId, usize> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        let version = NEXT_VERSION.fetch_add(1, Ordering::Relaxed);
        debug!(count = records.len(), version, "catalog built");
        Ok(Self {
            records: records.into(),
            index: Arc::new(index),
            version,
        })
    }

    /// Catalog over the dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_records(loader::bundled_dataset()?)
    }

    /// Catalog over the given source.
    pub fn load(source: &DatasetSource) -> Result<Self> {
        Self::from_records(source.load()?)
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[HookRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Token identifying this load.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&HookRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Look up a record by id, failing with [`CatalogError::NotFound`].
    pub fn require(&self, id: &str) -> Result<&HookRecord> {
        self.get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_owned()))
    }

    /// Matching records in display order.
    pub fn search(&self, query: &str, filter: &CategoryFilter) -> Vec<&HookRecord> {
        filter_and_sort(self.records.iter(), query, filter)
    }

    /// Record count per category, in selector order, including empty ones.
    pub fn category_counts(&self) -> Vec<(HookCategory, usize)> {
        HookCategory::all()
            .iter()
            .map(|&category| {
                let count = self
                    .records
                    .iter()
                    .filter(|r| r.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }

    /// Distinct implementation languages, sorted.
    pub fn languages(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.language.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
