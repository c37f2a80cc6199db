//! Interactive query/category state with a memoized view.
//!
//! [`BrowseState`] owns the two user-controlled inputs and recomputes the
//! filtered view only when the `(catalog version, query, category)` key
//! changes.

use hookhub_core::HookRecord;
use tracing::debug;

use crate::catalog::HookCatalog;
use crate::engine::{CategoryFilter, filter_and_sort};

#[derive(Clone, Debug, PartialEq, Eq)]
struct ViewKey {
    version: u64,
    query: String,
    category: CategoryFilter,
}

#[derive(Debug)]
struct CachedView<'a> {
    key: ViewKey,
    records: Vec<&'a HookRecord>,
}

/// Query and category selection over a catalog.
#[derive(Debug)]
pub struct BrowseState<'a> {
    catalog: &'a HookCatalog,
    query: String,
    category: CategoryFilter,
    cache: Option<CachedView<'a>>,
    recomputations: usize,
}

impl<'a> BrowseState<'a> {
    /// Empty query, all categories.
    pub fn new(catalog: &'a HookCatalog) -> Self {
        Self::with_category(catalog, CategoryFilter::All)
    }

    /// Empty query with an initial category selector.
    pub fn with_category(catalog: &'a HookCatalog, category: CategoryFilter) -> Self {
        Self {
            catalog,
            query: String::new(),
            category,
            cache: None,
            recomputations: 0,
        }
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current category selector.
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Replace the query text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replace the category selector.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Clear the query and select all categories.
    pub fn reset(&mut self) {
        self.query.clear();
        self.category = CategoryFilter::All;
    }

    /// How many times the view has been computed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Matching records in display order.
    pub fn view(&mut self) -> &[&'a HookRecord] {
        let key = ViewKey {
            version: self.catalog.version(),
            query: self.query.clone(),
            category: self.category.clone(),
        };

        if self.cache.as_ref().is_none_or(|cached| cached.key != key) {
            let catalog = self.catalog;
            let records = filter_and_sort(catalog.records(), &key.query, &key.category);
            self.recomputations += 1;
            debug!(
                query = %key.query,
                category = %key.category,
                count = records.len(),
                "view recomputed"
            );
            self.cache = Some(CachedView { key, records });
        }

        match &self.cache {
            Some(cached) => cached.records.as_slice(),
            None => &[],
        }
    }
}
