//! Line-oriented interactive browsing.
//!
//! Each input line either replaces the query or, when it starts with `:`,
//! runs a command. The listing is re-rendered after every change.

use std::io::{BufRead, Write};

use anyhow::Result;
use hookhub_catalog::{BrowseState, CategoryFilter};
use hookhub_settings::OutputFormat;
use tracing::warn;

use crate::render;

const PROMPT: &str = "> ";

const HELP: &str = "\
Type text to search names, descriptions, and authors.
Start with `::` to search for text beginning with `:`.
  :category <SELECTOR>  filter by category (All, MONITORING, SECURITY, ...)
  :clear                clear the search and show all categories
  :help                 show this help
  :quit                 exit";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Query(String),
    Category(String),
    Clear,
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let Some(command) = line.strip_prefix(':') else {
        return Input::Query(line.to_owned());
    };
    if command.starts_with(':') {
        return Input::Query(command.to_owned());
    }
    let mut parts = command.trim().splitn(2, char::is_whitespace);
    match (parts.next().unwrap_or_default(), parts.next()) {
        ("category" | "c", Some(selector)) => Input::Category(selector.trim().to_owned()),
        ("clear", None) => Input::Clear,
        ("help" | "h", None) => Input::Help,
        ("quit" | "q", None) => Input::Quit,
        _ => Input::Unknown(line.to_owned()),
    }
}

/// Run the browse loop until `:quit` or end of input.
pub fn run<R: BufRead, W: Write>(state: &mut BrowseState<'_>, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{HELP}")?;
    render_view(state, out)?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        match parse_input(&line?) {
            Input::Query(query) => state.set_query(query),
            Input::Category(selector) => {
                let filter = CategoryFilter::from_selector(&selector);
                if let CategoryFilter::Unknown(raw) = &filter {
                    warn!(selector = %raw, "unknown category selector");
                    writeln!(out, "Unknown category \"{raw}\"; no hooks will match.")?;
                }
                state.set_category(filter);
            }
            Input::Clear => state.reset(),
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Quit => return Ok(()),
            Input::Unknown(raw) => writeln!(out, "Unknown command: {raw} (try :help)")?,
        }
        render_view(state, out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn render_view<W: Write>(state: &mut BrowseState<'_>, out: &mut W) -> Result<()> {
    writeln!(out, "[query: \"{}\" | category: {}]", state.query(), state.category())?;
    let view = state.view();
    render::write_listing(out, view, OutputFormat::Text)
}
