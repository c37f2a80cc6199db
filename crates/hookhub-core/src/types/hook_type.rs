//! The [`HookType`] lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle trigger point at which a hook fires.
///
/// Purely descriptive metadata on a record. The wire form is the key
/// (`"PRE_TOOL_USE"`); [`HookType::event_name`] gives the event name the
/// assistant tool uses (`PreToolUse`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HookType {
    /// Before a tool is executed.
    PreToolUse,
    /// After a tool has executed.
    PostToolUse,
    /// When the user submits a prompt.
    UserPromptSubmit,
    /// Notification event.
    Notification,
    /// When the assistant stops.
    Stop,
    /// When a subagent stops.
    SubagentStop,
    /// When a subagent starts.
    SubagentStart,
    /// While a subagent streams output.
    SubagentStream,
}

impl HookType {
    /// Returns all hook type variants.
    #[must_use]
    pub fn all() -> &'static [HookType] {
        &[
            Self::PreToolUse,
            Self::PostToolUse,
            Self::UserPromptSubmit,
            Self::Notification,
            Self::Stop,
            Self::SubagentStop,
            Self::SubagentStart,
            Self::SubagentStream,
        ]
    }

    /// The dataset key for this hook type.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::PreToolUse => "PRE_TOOL_USE",
            Self::PostToolUse => "POST_TOOL_USE",
            Self::UserPromptSubmit => "USER_PROMPT_SUBMIT",
            Self::Notification => "NOTIFICATION",
            Self::Stop => "STOP",
            Self::SubagentStop => "SUBAGENT_STOP",
            Self::SubagentStart => "SUBAGENT_START",
            Self::SubagentStream => "SUBAGENT_STREAM",
        }
    }

    /// Lifecycle event name.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::PreToolUse => "PreToolUse",
            Self::PostToolUse => "PostToolUse",
            Self::UserPromptSubmit => "UserPromptSubmit",
            Self::Notification => "Notification",
            Self::Stop => "Stop",
            Self::SubagentStop => "SubagentStop",
            Self::SubagentStart => "SubagentStart",
            Self::SubagentStream => "SubagentStream",
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

impl FromStr for HookType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The serde renames are the source of truth for keys.
        serde_json::from_value(serde_json::Value::String(s.to_owned()))
            .map_err(|_| format!("unknown hook type: {s}"))
    }
}
