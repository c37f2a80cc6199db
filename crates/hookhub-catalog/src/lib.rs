//! # hookhub-catalog
//!
//! Dataset loader, in-memory catalog, and the filter/sort engine.
//!
//! The dataset is a `{"hooks": [...]}` JSON document, either compiled into
//! the binary or read from disk. It is validated once at load time and is
//! read-only afterwards. [`engine::filter_and_sort`] derives the ordered
//! view shown to the user from a free-text query and a category selector;
//! [`browse::BrowseState`] owns those two inputs and memoizes the last view.

#![deny(unsafe_code)]

pub mod browse;
pub mod catalog;
pub mod engine;
pub mod errors;
pub mod loader;

pub use browse::BrowseState;
pub use catalog::HookCatalog;
pub use engine::{CategoryFilter, filter_and_sort};
pub use errors::{CatalogError, Result};
