//! Facets command: print the filter vocabularies.

use facetgrid_core::error::Result;
use facetgrid_core::format::escape_quotes;

use crate::cli::{Cli, OutputFormat};
use crate::commands::load_catalog;

pub fn run(cli: &Cli) -> Result<()> {
    let catalog = load_catalog(cli)?;

    match cli.format {
        OutputFormat::Human => {
            println!("regions:");
            for region in &catalog.regions {
                println!("  {} ({})", region.name, region.slug);
            }
            println!("categories:");
            for category in &catalog.categories {
                println!("  {} ({})", category.name, category.slug);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "regions": catalog.regions,
                "categories": catalog.categories,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        }
        OutputFormat::Records => {
            for region in &catalog.regions {
                println!("R slug={} name=\"{}\"", region.slug, escape_quotes(&region.name));
            }
            for category in &catalog.categories {
                println!(
                    "C slug={} name=\"{}\"",
                    category.slug,
                    escape_quotes(&category.name)
                );
            }
        }
    }

    Ok(())
}
