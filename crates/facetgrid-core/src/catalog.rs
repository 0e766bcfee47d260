//! Catalog store: facet vocabularies and the item set.
//!
//! The catalog is loaded once per session from JSON and never mutated
//! afterwards. Derived per-item state (`active`, `score`) lives in the
//! session, not here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// One selectable option in a facet vocabulary.
///
/// Uniquely identified by `slug` within its vocabulary; the region and
/// category vocabularies are separate namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub name: String,
    /// Derived from `name` when the input omits it
    #[serde(default)]
    pub slug: String,
}

impl FacetOption {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub link: String,
    /// Region slugs this item is available in
    #[serde(default)]
    pub regions: Vec<String>,
    /// `false` in the input JSON means "no thumbnail"
    #[serde(default, deserialize_with = "thumbnail_from_json")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    /// Category membership, in input order
    #[serde(default)]
    pub categories: Vec<FacetOption>,
    /// Sponsor/placement rank; lower sorts earlier
    #[serde(default)]
    pub priority: i64,
    /// Unused by matching; carried for extension
    #[serde(default)]
    pub platform: Vec<String>,
}

/// The input contract allows `thumbnail: false` for "none".
fn thumbnail_from_json<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Thumbnail {
        Url(String),
        Flag(bool),
    }

    match Option::<Thumbnail>::deserialize(deserializer)? {
        Some(Thumbnail::Url(url)) if !url.is_empty() => Ok(Some(url)),
        _ => Ok(None),
    }
}

/// The full item set plus the region and category vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub regions: Vec<FacetOption>,
    #[serde(default)]
    pub categories: Vec<FacetOption>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from already-parsed parts, normalizing slugs.
    pub fn new(regions: Vec<FacetOption>, categories: Vec<FacetOption>, items: Vec<Item>) -> Self {
        let mut catalog = Self {
            regions,
            categories,
            items,
        };
        catalog.normalize();
        catalog
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        catalog.normalize();
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Normalize slugs once at load time so matching can compare
    /// selection values verbatim: facet options without a slug get one
    /// derived from their name, and item-side slugs are trimmed and
    /// lowercased.
    fn normalize(&mut self) {
        for option in self.regions.iter_mut().chain(self.categories.iter_mut()) {
            if option.slug.is_empty() {
                option.slug = slug::slugify(&option.name);
            } else {
                option.slug = normalize_slug(&option.slug);
            }
        }
        for item in &mut self.items {
            for region in &mut item.regions {
                *region = normalize_slug(region);
            }
            for category in &mut item.categories {
                if category.slug.is_empty() {
                    category.slug = slug::slugify(&category.name);
                } else {
                    category.slug = normalize_slug(&category.slug);
                }
            }
        }
    }

    /// All region slugs, in vocabulary order
    pub fn region_slugs(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.slug.clone()).collect()
    }

    /// All category slugs, in vocabulary order
    pub fn category_slugs(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.slug.clone()).collect()
    }

    pub fn is_known_region(&self, slug: &str) -> bool {
        self.regions.iter().any(|r| r.slug == slug)
    }

    pub fn is_known_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn normalize_slug(raw: &str) -> String {
    raw.trim().to_lowercase()
}
