//! Command dispatch for facetgrid

mod facets;
mod list;
mod route;
mod url;

use facetgrid_core::catalog::Catalog;
use facetgrid_core::config::DirectoryConfig;
use facetgrid_core::error::{FacetgridError, Result};

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => Err(FacetgridError::UsageError(
            "no command given; try --help".to_string(),
        )),
        Some(Commands::List(args)) => list::run(cli, args),
        Some(Commands::Facets) => facets::run(cli),
        Some(Commands::Url { command }) => url::run(cli, command),
        Some(Commands::Route(args)) => route::run(cli, args),
    }
}

/// Load the catalog named by --catalog; required for the engine
/// commands.
pub(crate) fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let path = cli.catalog.as_deref().ok_or_else(|| {
        FacetgridError::UsageError("--catalog <FILE> is required for this command".to_string())
    })?;
    Catalog::load(path)
}

/// Load --config when given, defaults otherwise.
pub(crate) fn load_config(cli: &Cli) -> Result<DirectoryConfig> {
    match cli.config.as_deref() {
        Some(path) => DirectoryConfig::load(path),
        None => Ok(DirectoryConfig::default()),
    }
}

/// Expand a --region/--category flag value against a vocabulary.
pub(crate) fn facet_selection(value: Option<&str>, vocabulary: Vec<String>) -> Vec<String> {
    match value {
        Some("all") => vocabulary,
        Some(csv) => csv
            .split(',')
            .filter(|slug| !slug.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
