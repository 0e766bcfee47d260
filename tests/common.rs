use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};

pub fn facetgrid() -> Command {
    cargo_bin_cmd!("facetgrid")
}

/// Write a small catalog fixture: two regions, three categories, five
/// items with distinct priorities and deliberate ties.
pub fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(
        &path,
        r##"{
  "regions": [
    { "name": "Europe", "slug": "europe" },
    { "name": "North America", "slug": "north-america" }
  ],
  "categories": [
    { "name": "CRM", "slug": "crm" },
    { "name": "Payments", "slug": "payments" },
    { "name": "Security", "slug": "security" }
  ],
  "items": [
    { "id": 1, "title": "Stripe", "link": "#", "regions": ["europe", "north-america"], "thumbnail": false,
      "excerpt": "Payment processing platform.", "categories": [{ "name": "Payments", "slug": "payments" }],
      "priority": 1, "platform": [] },
    { "id": 2, "title": "HubSpot", "link": "#", "regions": ["north-america"], "thumbnail": false,
      "excerpt": "CRM platform.", "categories": [{ "name": "CRM", "slug": "crm" }],
      "priority": 2, "platform": [] },
    { "id": 3, "title": "Salesforce", "link": "#", "regions": ["europe", "north-america"], "thumbnail": false,
      "excerpt": "CRM for sales and service.", "categories": [{ "name": "CRM", "slug": "crm" }],
      "priority": 3, "platform": [] },
    { "id": 4, "title": "Adyen", "link": "#", "regions": ["europe"], "thumbnail": false,
      "excerpt": "Payments for platforms.",
      "categories": [{ "name": "Payments", "slug": "payments" }, { "name": "Security", "slug": "security" }],
      "priority": 3, "platform": [] },
    { "id": 5, "title": "Auth0", "link": "#", "regions": ["europe", "north-america"], "thumbnail": false,
      "excerpt": "Authentication platform.", "categories": [{ "name": "Security", "slug": "security" }],
      "priority": 5, "platform": [] }
  ]
}"##,
    )
    .expect("write catalog fixture");
    path
}

/// Config fixture with a tiny pagination window for load-more tests.
#[allow(dead_code)]
pub fn write_small_page_config(dir: &Path) -> PathBuf {
    let path = dir.join("facetgrid.toml");
    fs::write(
        &path,
        "[pagination]\ninitial_page_size = 2\nstep = 2\n",
    )
    .expect("write config fixture");
    path
}
