//! Configuration module for Site-Surveyor
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every field has a default, so a config file is optional; the CLI
//! applies its flag overrides on top of whatever was loaded.
//!
//! # Example
//!
//! ```no_run
//! use site_surveyor::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will visit at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig};

// Re-export parser functions
pub use parser::load_config;
