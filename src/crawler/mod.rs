//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - The frontier queue and visited set
//! - The page fetch boundary and its HTTP adapter
//! - Link extraction and filtering
//! - Overall crawl orchestration

mod extractor;
mod fetcher;
mod frontier;
mod orchestrator;

pub use extractor::{extract_page, ExtractedPage};
pub use fetcher::{FetchOutcome, HttpFetcher, PageFetcher, RenderedPage, DEFAULT_USER_AGENT};
pub use frontier::Frontier;
pub use orchestrator::Crawler;

use crate::config::CrawlerConfig;
use crate::report::CrawlStats;
use crate::SurveyError;

/// Runs a complete crawl with the HTTP adapter and no collaborators
///
/// This is the convenience entry point for callers that do not need
/// screenshots or audits; construct a [`Crawler`] directly to plug those in.
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `start_url` - The seed URL
///
/// # Returns
///
/// * `Ok(CrawlStats)` - Finalized crawl statistics
/// * `Err(SurveyError)` - Fatal setup failure
pub async fn crawl(config: &CrawlerConfig, start_url: &str) -> Result<CrawlStats, SurveyError> {
    let fetcher = HttpFetcher::new(config)?;
    let mut crawler = Crawler::new(config.clone(), fetcher);
    crawler.crawl(start_url).await
}
