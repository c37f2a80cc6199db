//! Terminal rendering of hook listings.
//!
//! Text output mirrors the directory's card grid: one card per hook with a
//! summary line above. JSON output writes the records in dataset format.

use std::io::Write;

use anyhow::Result;
use hookhub_catalog::{CategoryFilter, HookCatalog};
use hookhub_core::{HookCategory, HookRecord, HookType};
use hookhub_settings::OutputFormat;

/// Shown instead of cards when nothing matches.
pub const EMPTY_TITLE: &str = "No hooks found matching your criteria.";
/// Hint shown below [`EMPTY_TITLE`].
pub const EMPTY_HINT: &str = "Try adjusting your search or filters.";

/// `Showing N hook(s)`.
pub fn summary(count: usize) -> String {
    let noun = if count == 1 { "hook" } else { "hooks" };
    format!("Showing {count} {noun}")
}

/// Write an ordered listing in the requested format.
pub fn write_listing<W: Write>(
    out: &mut W,
    records: &[&HookRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text_listing(out, records)?,
    }
    Ok(())
}

fn write_text_listing<W: Write>(out: &mut W, records: &[&HookRecord]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "{EMPTY_TITLE}")?;
        writeln!(out, "{EMPTY_HINT}")?;
        return Ok(());
    }

    writeln!(out, "{}", summary(records.len()))?;
    for record in records {
        writeln!(out)?;
        write_card(out, record)?;
    }
    Ok(())
}

/// Write one hook card.
///
/// The star count is only shown when the record has one; unranked hooks
/// show no count rather than zero.
pub fn write_card<W: Write>(out: &mut W, record: &HookRecord) -> Result<()> {
    let mut header = record.name.clone();
    if record.is_featured() {
        header.push_str("  [Featured]");
    }
    if let Some(stars) = record.stars {
        header.push_str(&format!("  ★ {stars}"));
    }
    let hook_types: Vec<&str> = record.hook_types.iter().map(|t| t.key()).collect();

    writeln!(out, "{header}")?;
    writeln!(out, "  {}", record.category.label())?;
    writeln!(out, "  {}", record.description)?;
    writeln!(out, "  by {} · {}", record.author, record.language)?;
    writeln!(out, "  {}", hook_types.join(" "))?;
    writeln!(out, "  {}", record.github_url)?;
    Ok(())
}

/// Write the category selector list with record counts.
pub fn write_categories<W: Write>(out: &mut W, catalog: &HookCatalog) -> Result<()> {
    let all = CategoryFilter::All.to_string();
    writeln!(out, "{all:<12} {:<28} {:>5}", "All categories", catalog.len())?;
    for (category, count) in catalog.category_counts() {
        write_category_row(out, category, count)?;
    }
    Ok(())
}

fn write_category_row<W: Write>(out: &mut W, category: HookCategory, count: usize) -> Result<()> {
    writeln!(out, "{:<12} {:<28} {count:>5}", category.key(), category.label())?;
    Ok(())
}

/// Write the hook type keys with their event names.
pub fn write_hook_types<W: Write>(out: &mut W) -> Result<()> {
    for hook_type in HookType::all() {
        writeln!(out, "{:<20} {}", hook_type.key(), hook_type.event_name())?;
    }
    Ok(())
}

/// Write each implementation language with its record count.
pub fn write_languages<W: Write>(out: &mut W, catalog: &HookCatalog) -> Result<()> {
    for language in catalog.languages() {
        let count = catalog
            .records()
            .iter()
            .filter(|r| r.language == language)
            .count();
        writeln!(out, "{language:<20} {count:>5}")?;
    }
    Ok(())
}
