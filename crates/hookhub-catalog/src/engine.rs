//! Filter/sort engine.
//!
//! A record is shown when its name, description, or author contains the
//! query (case-insensitive, no trimming) and its category matches the
//! selector. Matches are ordered featured first, then by stars descending,
//! with ties kept in input order. The engine is pure: it borrows the
//! records and returns a freshly allocated ordering.

use std::cmp::Reverse;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use hookhub_core::constants::ALL_CATEGORIES;
use hookhub_core::{HookCategory, HookRecord};

/// Category selector.
///
/// Parsing never fails: a value that is neither `"All"` nor a category key
/// becomes [`CategoryFilter::Unknown`], which matches no record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exactly one category.
    Only(HookCategory),
    /// A selector outside the enumeration.
    Unknown(String),
}

impl CategoryFilter {
    /// Parse a selector string. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        if selector == ALL_CATEGORIES {
            return Self::All;
        }
        match selector.parse::<HookCategory>() {
            Ok(category) => Self::Only(category),
            Err(_) => Self::Unknown(selector.to_owned()),
        }
    }

    /// Whether a record in `category` passes this selector.
    #[must_use]
    pub fn matches(&self, category: HookCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
            Self::Unknown(_) => false,
        }
    }

    /// Every valid selector value, `"All"` first.
    #[must_use]
    pub fn selectors() -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(HookCategory::all().iter().map(|c| c.key()))
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(category) => f.write_str(category.key()),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl From<HookCategory> for CategoryFilter {
    fn from(category: HookCategory) -> Self {
        Self::Only(category)
    }
}

/// Whether `record` matches the free-text `query`.
pub fn matches_query(record: &HookRecord, query: &str) -> bool {
    matches_lowered(record, &query.to_lowercase())
}

/// Whether `record` passes the category selector.
pub fn matches_category(record: &HookRecord, filter: &CategoryFilter) -> bool {
    filter.matches(record.category)
}

/// Star count used for ordering; absent stars rank as zero.
pub fn effective_stars(record: &HookRecord) -> u64 {
    record.effective_stars()
}

fn matches_lowered(record: &HookRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.author.to_lowercase().contains(needle)
}

/// Filter `records` by `query` and `filter`, then order them for display.
///
/// Accepts any iterator of record references, so the output of one call can
/// be fed straight into another.
pub fn filter_and_sort<'a, I>(
    records: I,
    query: &str,
    filter: &CategoryFilter,
) -> Vec<&'a HookRecord>
where
    I: IntoIterator<Item = &'a HookRecord>,
{
    let needle = query.to_lowercase();
    let mut matched: Vec<&HookRecord> = records
        .into_iter()
        .filter(|r| matches_category(r, filter) && matches_lowered(r, &needle))
        .collect();

    // sort_by_key is stable, so equal keys keep input order
    matched.sort_by_key(|r| (Reverse(r.is_featured()), Reverse(effective_stars(r))));
    matched
}
