//! Package-level constants.

/// Selector value that matches every category.
pub const ALL_CATEGORIES: &str = "All";
