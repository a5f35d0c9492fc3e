//! Crawl orchestrator - main crawl loop
//!
//! This module drives the whole crawl: it pops the frontier, fetches pages
//! through the adapter, hands successful pages to the collaborators, extracts
//! and enqueues new links, and accumulates statistics while enforcing the
//! page budget. Every per-page failure is absorbed here; only setup errors
//! reach the caller.

use crate::collaborators::{LighthouseAuditor, NoopAuditor, NoopCapturer, ScreenshotCapturer};
use crate::config::CrawlerConfig;
use crate::crawler::extractor::{extract_page, ExtractedPage};
use crate::crawler::fetcher::{FetchOutcome, PageFetcher, RenderedPage};
use crate::crawler::frontier::Frontier;
use crate::report::{CrawlStats, PageRecord};
use crate::url::{is_downloadable_file, normalize_url};
use crate::SurveyError;
use url::Url;

/// Breadth-first single-site crawler
///
/// The fetcher and both collaborators are injected at construction; the
/// collaborators default to no-ops so the main loop never has to check for
/// their presence. All crawl state (frontier, visited set, statistics) is
/// created inside [`crawl`](Crawler::crawl), so one instance can run
/// consecutive crawls without state leaking between them.
pub struct Crawler<F, S = NoopCapturer, A = NoopAuditor> {
    config: CrawlerConfig,
    fetcher: F,
    capturer: S,
    auditor: A,
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a crawler with no-op collaborators
    pub fn new(config: CrawlerConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            capturer: NoopCapturer,
            auditor: NoopAuditor,
        }
    }
}

impl<F, S, A> Crawler<F, S, A>
where
    F: PageFetcher,
    S: ScreenshotCapturer,
    A: LighthouseAuditor,
{
    /// Replaces the screenshot collaborator
    pub fn with_capturer<S2: ScreenshotCapturer>(self, capturer: S2) -> Crawler<F, S2, A> {
        Crawler {
            config: self.config,
            fetcher: self.fetcher,
            capturer,
            auditor: self.auditor,
        }
    }

    /// Replaces the audit collaborator
    pub fn with_auditor<A2: LighthouseAuditor>(self, auditor: A2) -> Crawler<F, S, A2> {
        Crawler {
            config: self.config,
            fetcher: self.fetcher,
            capturer: self.capturer,
            auditor,
        }
    }

    /// Crawls the site starting from the given URL
    ///
    /// Visits pages breadth-first in discovery order until the frontier
    /// drains or the page budget is reached. Per-page failures (timeouts,
    /// navigation errors, extraction or collaborator errors) are logged and
    /// skipped; the crawl itself only fails on setup problems such as an
    /// unparseable seed URL.
    ///
    /// # Arguments
    ///
    /// * `start_url` - The seed URL; its host defines the crawl scope
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlStats)` - Finalized statistics, possibly with fewer pages
    ///   than the budget allows
    /// * `Err(SurveyError)` - Fatal setup failure
    pub async fn crawl(&mut self, start_url: &str) -> Result<CrawlStats, SurveyError> {
        let seed = normalize_url(start_url)?;

        let mut frontier = Frontier::new();
        frontier.enqueue_if_new(seed.clone());

        let mut stats = CrawlStats::begin(seed.clone());
        let started = std::time::Instant::now();
        let max_pages = self.config.max_pages as usize;

        tracing::info!(
            "Starting crawl of {} (budget: {} pages)",
            seed,
            self.config.max_pages
        );

        while stats.pages.len() < max_pages {
            let current = match frontier.dequeue() {
                Some(url) => url,
                None => {
                    tracing::info!("Frontier drained, crawl complete");
                    break;
                }
            };

            if is_downloadable_file(&current) {
                tracing::debug!("Skipping downloadable file: {}", current);
                continue;
            }

            match self.fetcher.fetch(&current).await {
                FetchOutcome::Timeout => {
                    tracing::warn!("Timed out loading {}", current);
                }
                FetchOutcome::Failed { reason } => {
                    tracing::warn!("Failed to load {}: {}", current, reason);
                }
                FetchOutcome::Success(page) => {
                    let number = stats.pages.len() as u32;
                    let record = self
                        .process_page(&page, &current, &seed, number, &mut frontier)
                        .await;

                    // Release the per-page context before touching the next
                    // frontier entry
                    self.fetcher.close(page).await;

                    stats.record_page(record);

                    if stats.pages.len() % 10 == 0 {
                        let rate = stats.pages.len() as f64 / started.elapsed().as_secs_f64();
                        tracing::info!(
                            "Progress: {} pages crawled, {} queued, {:.2} pages/sec",
                            stats.pages.len(),
                            frontier.pending(),
                            rate
                        );
                    }
                }
            }
        }

        stats.finalize();

        tracing::info!(
            "Crawl completed: {} pages in {:.2}s",
            stats.pages_crawled,
            stats.duration_seconds
        );

        Ok(stats)
    }

    /// Runs the collaborators and link extraction for one loaded page
    ///
    /// Collaborator errors and extraction errors are isolated here: each is
    /// logged and leaves its part of the record empty, but the page is still
    /// recorded and the crawl continues.
    async fn process_page(
        &mut self,
        page: &RenderedPage,
        requested: &Url,
        seed: &Url,
        number: u32,
        frontier: &mut Frontier,
    ) -> PageRecord {
        tracing::info!(
            "Processing page {}/{}: {}",
            number + 1,
            self.config.max_pages,
            requested
        );

        let mut record = PageRecord::new(requested.clone(), number);

        match self.capturer.capture(page, number).await {
            Ok(screenshots) => record.screenshots = screenshots,
            Err(e) => {
                tracing::warn!("Screenshot capture failed for {}: {:#}", requested, e);
            }
        }

        match self.auditor.audit(requested, number).await {
            Ok(result) if !result.is_null() => record.lighthouse = Some(result),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Audit failed for {}: {:#}", requested, e);
            }
        }

        // Relative hrefs resolve against the URL the page was served from;
        // scope is still judged against the seed
        let extracted =
            match extract_page(&page.html, &page.url, seed, self.config.domain_policy) {
                Ok(extracted) => extracted,
                Err(e) => {
                    tracing::warn!("Link extraction failed for {}: {}", requested, e);
                    ExtractedPage {
                        title: None,
                        links: Vec::new(),
                    }
                }
            };

        record.title = extracted.title;

        let found = extracted.links.len();
        let mut added = 0;
        for link in extracted.links {
            if frontier.enqueue_if_new(link) {
                added += 1;
            }
        }

        tracing::debug!(
            "Found {} links on {}, added {} new to the queue",
            found,
            requested,
            added
        );

        record
    }
}
