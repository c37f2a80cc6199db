//! # hookhub-core
//!
//! Foundation types for the HookHub directory.
//!
//! This crate provides the shared vocabulary the other HookHub crates depend on:
//!
//! - **Records**: [`HookRecord`], one immutable entry of the bundled dataset
//! - **Enumerations**: [`HookCategory`] and [`HookType`] as closed lookup tables
//!   mapping wire keys (`"SECURITY"`, `"PRE_TOOL_USE"`) to display labels
//! - **Branded IDs**: [`HookId`] newtype so hook ids are not plain strings
//! - **Logging**: `tracing` subscriber setup and an in-memory capture helper for tests

#![deny(unsafe_code)]

pub mod constants;
pub mod ids;
pub mod logging;
pub mod types;

pub use ids::HookId;
pub use types::{HookCategory, HookRecord, HookType};
