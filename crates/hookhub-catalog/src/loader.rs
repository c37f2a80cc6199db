//! Dataset loading and validation.
//!
//! The dataset is a JSON object with a single `hooks` array. Enumeration
//! membership (categories, hook types) is enforced by deserialization;
//! uniqueness of ids and non-empty hook types are checked afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use hookhub_core::HookRecord;
use serde::Deserialize;
use tracing::debug;

use crate::errors::{CatalogError, Result};

/// Maximum size of a dataset file read from disk (16 MiB).
pub const MAX_DATASET_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../data/hooks.json");

#[derive(Deserialize)]
struct DatasetFile {
    hooks: Vec<HookRecord>,
}

/// Where a dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    /// The dataset compiled into the binary.
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
}

impl DatasetSource {
    /// `File` when a path is given, otherwise `Bundled`.
    pub fn from_optional_path(path: Option<impl Into<PathBuf>>) -> Self {
        path.map_or(Self::Bundled, |p| Self::File(p.into()))
    }

    /// Load and validate the records from this source.
    pub fn load(&self) -> Result<Vec<HookRecord>> {
        match self {
            Self::Bundled => bundled_dataset(),
            Self::File(path) => load_dataset_from_path(path),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse and validate a dataset document.
pub fn parse_dataset(json: &str) -> Result<Vec<HookRecord>> {
    let file: DatasetFile = serde_json::from_str(json)?;
    validate(&file.hooks)?;
    Ok(file.hooks)
}

/// Check the invariants serde cannot express.
///
/// Ids must be unique and every record must list at least one hook type.
pub fn validate(records: &[HookRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId(record.id.to_string()));
        }
        if record.hook_types.is_empty() {
            return Err(CatalogError::EmptyHookTypes {
                id: record.id.to_string(),
            });
        }
    }
    Ok(())
}

/// The dataset compiled into the binary.
pub fn bundled_dataset() -> Result<Vec<HookRecord>> {
    let records = parse_dataset(BUNDLED_DATASET)?;
    debug!(count = records.len(), source = "bundled", "dataset loaded");
    Ok(records)
}

/// Read, parse, and validate a dataset file.
pub fn load_dataset_from_path(path: &Path) -> Result<Vec<HookRecord>> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_DATASET_FILE_SIZE {
        return Err(CatalogError::FileTooLarge {
            path: path.display().to_string(),
            size,
            max: MAX_DATASET_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path)?;
    let records = parse_dataset(&content)?;
    debug!(count = records.len(), source = %path.display(), "dataset loaded");
    Ok(records)
}
