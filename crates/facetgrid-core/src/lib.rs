//! Facetgrid Core Library
//!
//! Engine for a filterable directory grid: facet selection state,
//! matching and relevance scoring, ranking and pagination, and URL
//! query-string synchronization.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod routing;
pub mod selection;
pub mod session;
pub mod urlsync;
pub mod window;
