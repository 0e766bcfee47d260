//! Route command: landing-page routing rules for a country.

use facetgrid_core::error::Result;
use facetgrid_core::routing::{self, RedirectRequest};

use crate::cli::{Cli, OutputFormat, RouteArgs};
use crate::commands::load_config;

pub fn run(cli: &Cli, args: &RouteArgs) -> Result<()> {
    let config = load_config(cli)?;
    let routing_cfg = &config.routing;

    let name = routing::country_name(&args.country);
    let eu = routing::is_eu_country(&args.country);
    let consent = routing::requires_consent(&args.country);
    let server = routing::register_server(routing_cfg, &args.country).to_string();

    let redirect = if args.redirect {
        let mut request = RedirectRequest::for_country(args.country.to_uppercase());
        request.base_redirect_url = args.base_url.clone();
        request.partition_id = args.partition.clone();
        request.auth_token = args.token.clone();
        request.auto_login_nonce = args.nonce.clone();
        request.username = args.username.clone();
        request.force_legacy = args.force_legacy;
        Some(routing::build_redirect_url(routing_cfg, &request)?)
    } else {
        None
    };

    match cli.format {
        OutputFormat::Human => {
            println!(
                "country: {} ({})",
                args.country.to_uppercase(),
                name.unwrap_or("Other")
            );
            println!("eu region: {}", if eu { "yes" } else { "no" });
            println!("consent required: {}", if consent { "yes" } else { "no" });
            if !server.is_empty() {
                println!("register server: {server}");
            }
            if let Some(redirect) = &redirect {
                println!("redirect: {redirect}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "country": args.country.to_uppercase(),
                "name": name,
                "eu": eu,
                "consent_required": consent,
                "register_server": server,
                "redirect": redirect,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        }
        OutputFormat::Records => {
            println!(
                "T country={} name=\"{}\" eu={} consent={} server=\"{}\"{}",
                args.country.to_uppercase(),
                name.unwrap_or("Other"),
                eu,
                consent,
                server,
                redirect
                    .map(|r| format!(" redirect=\"{r}\""))
                    .unwrap_or_default(),
            );
        }
    }

    Ok(())
}
