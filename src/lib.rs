//! Site-Surveyor: a breadth-first single-site crawler
//!
//! This crate crawls a website starting from a seed URL, discovering same-domain
//! pages via hyperlink extraction up to a page budget, and hands each visited page
//! to optional collaborators (screenshot capture, performance audit) before
//! returning per-crawl statistics.

pub mod collaborators;
pub mod config;
pub mod crawler;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Surveyor operations
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Site-Surveyor operations
pub type Result<T> = std::result::Result<T, SurveyError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use collaborators::{AuditResult, LighthouseAuditor, ScreenshotCapturer, ScreenshotRef};
pub use config::Config;
pub use crawler::{crawl, Crawler, FetchOutcome, HttpFetcher, PageFetcher, RenderedPage};
pub use report::{CrawlStats, PageRecord};
pub use url::{is_downloadable_file, is_same_domain, normalize_url, DomainPolicy};
