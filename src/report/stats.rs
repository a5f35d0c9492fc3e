//! Crawl statistics types
//!
//! [`CrawlStats`] is created when a crawl starts and finalized when it ends;
//! it is owned exclusively by the orchestrator for the duration of one crawl
//! invocation. [`PageRecord`]s are immutable once appended.

use crate::collaborators::{AuditResult, ScreenshotRef};
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// Result of processing one successfully loaded page
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    /// The normalized URL that was requested
    pub url: Url,

    /// Zero-based sequential number within the crawl
    pub number: u32,

    /// Page title, if the document had one
    pub title: Option<String>,

    /// Screenshots captured for this page
    pub screenshots: Vec<ScreenshotRef>,

    /// Audit result, if an auditor was configured and succeeded
    pub lighthouse: Option<AuditResult>,
}

impl PageRecord {
    /// Creates an empty record for a page
    pub fn new(url: Url, number: u32) -> Self {
        Self {
            url,
            number,
            title: None,
            screenshots: Vec::new(),
            lighthouse: None,
        }
    }
}

/// Aggregate statistics for one crawl invocation
#[derive(Debug, Clone, Serialize)]
pub struct CrawlStats {
    /// When the crawl started
    pub start_time: DateTime<Utc>,

    /// When the crawl finished
    pub end_time: DateTime<Utc>,

    /// Wall-clock duration in seconds
    pub duration_seconds: f64,

    /// The normalized seed URL
    pub start_url: Url,

    /// Number of pages successfully crawled (skips and failures excluded)
    pub pages_crawled: u32,

    /// Per-page results, in visit order
    pub pages: Vec<PageRecord>,
}

impl CrawlStats {
    /// Creates stats for a crawl starting now
    pub fn begin(start_url: Url) -> Self {
        let start_time = Utc::now();
        Self {
            start_time,
            end_time: start_time,
            duration_seconds: 0.0,
            start_url,
            pages_crawled: 0,
            pages: Vec::new(),
        }
    }

    /// Appends a page record and updates the crawled count
    pub fn record_page(&mut self, record: PageRecord) {
        self.pages.push(record);
        self.pages_crawled = self.pages.len() as u32;
    }

    /// Stamps the end time and computes the duration
    pub fn finalize(&mut self) {
        self.end_time = Utc::now();
        self.duration_seconds =
            (self.end_time - self.start_time).num_milliseconds() as f64 / 1000.0;
    }
}
