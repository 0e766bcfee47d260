//! Url command: the query-string codec from the command line.

use facetgrid_core::error::Result;
use facetgrid_core::selection::Selection;
use facetgrid_core::urlsync;

use crate::cli::{Cli, OutputFormat, UrlCommands};
use crate::commands::{facet_selection, load_catalog};

pub fn run(cli: &Cli, command: &UrlCommands) -> Result<()> {
    match command {
        UrlCommands::Encode { region, category } => encode(cli, region.as_deref(), category.as_deref()),
        UrlCommands::Decode { query } => decode(cli, query),
    }
}

fn encode(cli: &Cli, region: Option<&str>, category: Option<&str>) -> Result<()> {
    let catalog = load_catalog(cli)?;

    let mut selection = Selection::new();
    selection.set_regions(facet_selection(region, catalog.region_slugs()));
    selection.set_categories(facet_selection(category, catalog.category_slugs()));

    let query = urlsync::encode("", &selection, &catalog);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "query": query }));
        }
        _ => println!("{query}"),
    }

    Ok(())
}

fn decode(cli: &Cli, query: &str) -> Result<()> {
    let catalog = load_catalog(cli)?;
    let selection = urlsync::decode(query, &catalog);

    match cli.format {
        OutputFormat::Human => {
            println!("regions: {}", joined_or_dash(&selection.regions));
            println!("categories: {}", joined_or_dash(&selection.categories));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&selection).unwrap_or_default()
            );
        }
        OutputFormat::Records => {
            println!(
                "S regions={} categories={}",
                joined_or_dash(&selection.regions),
                joined_or_dash(&selection.categories),
            );
        }
    }

    Ok(())
}

fn joined_or_dash(slugs: &[String]) -> String {
    if slugs.is_empty() {
        "-".to_string()
    } else {
        slugs.join(",")
    }
}
