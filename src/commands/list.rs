//! List command: run the engine and print the visible window.

use facetgrid_core::catalog::Item;
use facetgrid_core::engine::ItemState;
use facetgrid_core::error::Result;
use facetgrid_core::format::escape_quotes;
use facetgrid_core::session::Session;
use facetgrid_core::urlsync::MemoryHistory;

use crate::cli::{Cli, ListArgs, OutputFormat};
use crate::commands::{load_catalog, load_config};

pub fn run(cli: &Cli, args: &ListArgs) -> Result<()> {
    let catalog = load_catalog(cli)?;
    let config = load_config(cli)?;

    let history = MemoryHistory::with_initial(initial_query(args));
    let mut session = Session::with_history(catalog, &config, Box::new(history));
    session.bootstrap();

    for _ in 0..args.more {
        session.load_more();
    }

    match cli.format {
        OutputFormat::Human => print_human(cli, &session),
        OutputFormat::Json => print_json(&session),
        OutputFormat::Records => print_records(&session),
    }

    Ok(())
}

/// Flags become the page's initial query string; an empty one lands on
/// the first-load "everything selected" default.
fn initial_query(args: &ListArgs) -> String {
    if let Some(query) = &args.query {
        return query.clone();
    }

    let mut parts = Vec::new();
    if let Some(region) = &args.region {
        parts.push(format!("region={region}"));
    }
    if let Some(category) = &args.category {
        parts.push(format!("category={category}"));
    }
    parts.join("&")
}

fn print_human(cli: &Cli, session: &Session) {
    for (position, (item, state)) in session.visible().enumerate() {
        println!(
            "{:>3}. {} [priority {}, score {}]",
            position + 1,
            item.title,
            item.priority,
            state.score
        );
        if !item.excerpt.is_empty() && !cli.quiet {
            println!("     {}", item.excerpt);
        }
    }

    if !cli.quiet {
        println!(
            "\n{} of {} active items shown (catalog {}, page size {}){}",
            session.visible_len(),
            session.active_count(),
            session.catalog().len(),
            session.page_size(),
            if session.has_more() {
                "; more available"
            } else {
                ""
            }
        );
    }
}

fn print_json(session: &Session) {
    let items: Vec<serde_json::Value> = session
        .visible()
        .map(|(item, state)| item_json(item, state))
        .collect();

    let output = serde_json::json!({
        "query": session.query(),
        "selection": session.selection(),
        "total": session.catalog().len(),
        "active": session.active_count(),
        "visible": session.visible_len(),
        "page_size": session.page_size(),
        "has_more": session.has_more(),
        "items": items,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

fn item_json(item: &Item, state: ItemState) -> serde_json::Value {
    serde_json::json!({
        "id": item.id,
        "title": item.title,
        "link": item.link,
        "priority": item.priority,
        "score": state.score,
        "regions": item.regions,
        "categories": item.categories.iter().map(|c| c.slug.clone()).collect::<Vec<_>>(),
    })
}

fn print_records(session: &Session) {
    println!(
        "H active={} total={} visible={} page_size={} has_more={} query=\"{}\"",
        session.active_count(),
        session.catalog().len(),
        session.visible_len(),
        session.page_size(),
        session.has_more(),
        escape_quotes(session.query()),
    );

    for (item, state) in session.visible() {
        println!(
            "I id={} title=\"{}\" priority={} score={} regions={} categories={}",
            item.id,
            escape_quotes(&item.title),
            item.priority,
            state.score,
            item.regions.join(","),
            item.categories
                .iter()
                .map(|c| c.slug.as_str())
                .collect::<Vec<_>>()
                .join(","),
        );
    }
}
