//! URL handling module for Site-Surveyor
//!
//! This module provides URL normalization, same-domain scope checks, and
//! downloadable-resource classification. All functions here are pure; the
//! normalized string form of a URL is the identity key the crawl uses for
//! deduplication.

mod classify;
mod normalize;

// Re-export main functions
pub use classify::{is_downloadable_file, is_same_domain, DomainPolicy};
pub use normalize::normalize_url;
