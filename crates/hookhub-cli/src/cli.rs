//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hookhub_settings::OutputFormat;

/// Browse the HookHub directory of coding-assistant hooks.
#[derive(Parser, Debug)]
#[command(name = "hookhub", version, about = "Browse the HookHub directory of hooks")]
pub struct Cli {
    /// Dataset file to read instead of the bundled one.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Log filter (overrides settings; `RUST_LOG` still wins).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands. Defaults to `list` with no filters.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List matching hooks, featured first.
    List {
        /// Case-insensitive text matched against name, description, and author.
        #[arg(short, long, default_value = "")]
        query: String,

        /// `All` or a category key such as `SECURITY`.
        #[arg(short, long)]
        category: Option<String>,

        /// Output format.
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Show a single hook by id.
    Show {
        /// Hook id.
        id: String,
    },
    /// List category selectors with labels and counts.
    Categories,
    /// List hook types.
    HookTypes,
    /// List implementation languages with counts.
    Languages,
    /// Interactive search over stdin.
    Browse {
        /// Initial category selector.
        #[arg(short, long)]
        category: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::List {
            query: String::new(),
            category: None,
            format: None,
        }
    }
}
