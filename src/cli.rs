//! CLI argument parsing for facetgrid
//!
//! Global flags: --catalog, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use facetgrid_core::format::OutputFormat;

/// Facetgrid - filterable directory grid engine
#[derive(Parser, Debug)]
#[command(name = "facetgrid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the catalog JSON file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to the directory configuration TOML
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level diagnostics (scoring breakdowns, cascade events)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items matching a filter selection, ranked and paginated
    List(ListArgs),

    /// Show the region and category vocabularies
    Facets,

    /// Encode or decode filter query strings
    Url {
        #[command(subcommand)]
        command: UrlCommands,
    },

    /// Resolve landing-page routing for a country
    Route(RouteArgs),
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Region selection: "all" or comma-separated slugs
    #[arg(long)]
    pub region: Option<String>,

    /// Category selection: "all" or comma-separated slugs
    #[arg(long)]
    pub category: Option<String>,

    /// Restore the whole selection from a query string instead
    #[arg(long, conflicts_with_all = ["region", "category"])]
    pub query: Option<String>,

    /// Apply "load more" this many times before printing
    #[arg(long, default_value_t = 0)]
    pub more: u32,
}

#[derive(Subcommand, Debug)]
pub enum UrlCommands {
    /// Encode a selection into a canonical query string
    Encode {
        /// Region selection: "all" or comma-separated slugs
        #[arg(long)]
        region: Option<String>,

        /// Category selection: "all" or comma-separated slugs
        #[arg(long)]
        category: Option<String>,
    },

    /// Decode a query string into a selection
    Decode {
        /// Query string, e.g. "region=all&category=crm,payments"
        query: String,
    },
}

/// Arguments for the route command.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// ISO 3166-1 alpha-2 country code
    pub country: String,

    /// Also build a redirect URL
    #[arg(long)]
    pub redirect: bool,

    /// Override the region-derived redirect base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Partition identifier from the registration response
    #[arg(long)]
    pub partition: Option<String>,

    /// Legacy auth token
    #[arg(long)]
    pub token: Option<String>,

    /// SSO auto-login nonce
    #[arg(long)]
    pub nonce: Option<String>,

    /// Username carried into the SSO flow
    #[arg(long)]
    pub username: Option<String>,

    /// Force the legacy flow even when a nonce is present
    #[arg(long)]
    pub force_legacy: bool,
}
