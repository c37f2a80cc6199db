//! Branded ID newtypes.
//!
//! Hook ids come from the dataset rather than being generated, so the
//! newtype only wraps the string and keeps it from being mixed up with
//! names, authors, or other free-text fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a hook record within the dataset.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookId(String);

impl HookId {
    /// Return the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::ops::Deref for HookId {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for HookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HookId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for HookId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<HookId> for String {
    fn from(id: HookId) -> Self {
        id.0
    }
}
