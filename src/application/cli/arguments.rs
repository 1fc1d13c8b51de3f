use clap::{Parser, Subcommand};

use crate::models::enums::{Preset, Source};

/// Default topic for the bare `newswire` demonstration run.
pub const DEFAULT_QUERY: &str = "investment";

#[derive(Parser)]
#[command(name = "newswire")]
#[command(version)]
#[command(about = "Fetch investment news from The Guardian, Reddit, and NewsAPI")]
pub struct Cli {
    /// Runs a merged fetch for the default query when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch from each source and report every outcome separately
    Fetch {
        /// Search query
        #[arg(default_value = DEFAULT_QUERY)]
        query: String,

        /// Fetch a single source instead of all three
        #[arg(short, long, value_enum)]
        source: Option<Source>,

        /// Sub-community for the forum source
        #[arg(long)]
        subreddit: Option<String>,

        /// Maximum results per source
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Fetch from every source and print one merged, newest-first listing
    Merge {
        /// Search query
        #[arg(default_value = DEFAULT_QUERY)]
        query: String,

        /// Named topic preset (takes precedence over the query)
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,

        /// Sub-community for the forum source
        #[arg(long)]
        subreddit: Option<String>,

        /// Maximum results per source
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Sweep every topic preset and print a de-duplicated digest
    Digest,
    /// List topic presets and their per-source query mappings
    Presets,
    /// Manage application configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Set one or more configuration values (format: key.path=value)
    Set {
        /// Configuration keys to set (e.g., "newsapi.api_key=abc123")
        keys: Vec<String>,
    },
    /// Get one or more configuration values (format: key.path)
    Get {
        /// Configuration keys to retrieve (e.g., "reddit.subreddit")
        keys: Vec<String>,
    },
    /// List all configuration keys and values
    List,
    /// Show the entire configuration as JSON
    Show,
    /// Reset configuration to defaults
    Reset,
}
