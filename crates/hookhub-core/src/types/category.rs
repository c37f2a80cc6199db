//! The [`HookCategory`] lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag of a hook, used for filtering and grouping.
///
/// The wire form is the key (`"MONITORING"`); [`HookCategory::label`] gives
/// the human-readable name. Declaration order is the selector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HookCategory {
    /// Monitoring & Observability.
    Monitoring,
    /// Security & Validation.
    Security,
    /// Workflow Automation.
    Workflow,
    /// Testing & Quality.
    Testing,
    /// External Integration.
    Integration,
    /// Utilities & Helpers.
    Utility,
    /// Learning & Examples.
    Learning,
    /// Team Collaboration.
    Team,
}

impl HookCategory {
    /// Returns all categories in selector order.
    #[must_use]
    pub fn all() -> &'static [HookCategory] {
        &[
            Self::Monitoring,
            Self::Security,
            Self::Workflow,
            Self::Testing,
            Self::Integration,
            Self::Utility,
            Self::Learning,
            Self::Team,
        ]
    }

    /// The dataset key for this category.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Monitoring => "MONITORING",
            Self::Security => "SECURITY",
            Self::Workflow => "WORKFLOW",
            Self::Testing => "TESTING",
            Self::Integration => "INTEGRATION",
            Self::Utility => "UTILITY",
            Self::Learning => "LEARNING",
            Self::Team => "TEAM",
        }
    }

    /// Display label shown on cards and in the category selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monitoring => "Monitoring & Observability",
            Self::Security => "Security & Validation",
            Self::Workflow => "Workflow Automation",
            Self::Testing => "Testing & Quality",
            Self::Integration => "External Integration",
            Self::Utility => "Utilities & Helpers",
            Self::Learning => "Learning & Examples",
            Self::Team => "Team Collaboration",
        }
    }
}

impl fmt::Display for HookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HookCategory {
    type Err = String;

    /// Parses a category key. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("unknown hook category: {s}"))
    }
}
