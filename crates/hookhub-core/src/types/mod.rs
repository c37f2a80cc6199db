//! Dataset type definitions.
//!
//! Field names use `#[serde(rename_all = "camelCase")]` to match the
//! dataset file. Enumerations serialize as their upper-case keys
//! (`"SECURITY"`, `"PRE_TOOL_USE"`), which is what the dataset stores.

mod category;
mod hook_type;
mod record;

pub use category::HookCategory;
pub use hook_type::HookType;
pub use record::HookRecord;
