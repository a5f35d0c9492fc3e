//! Collaborator contracts for per-page enrichment
//!
//! Screenshot capture and performance auditing are external concerns; the
//! crawl engine only defines the interfaces it calls into them with. Both
//! collaborators are optional — the orchestrator is constructed with the
//! no-op implementations and swaps in real ones when asked, so the main loop
//! never checks for their presence.
//!
//! Collaborators are best-effort. They report errors as `anyhow::Result`
//! (they typically wrap external processes or services), and the orchestrator
//! isolates a failing collaborator to the page it failed on: the error is
//! logged and the corresponding [`PageRecord`](crate::report::PageRecord)
//! field stays empty.

use crate::crawler::RenderedPage;
use serde::Serialize;
use std::future::Future;
use std::path::PathBuf;
use url::Url;

/// Free-form audit payload, as produced by tools like Lighthouse
pub type AuditResult = serde_json::Value;

/// Reference to one captured screenshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenshotRef {
    /// Capturer-chosen label, e.g. a viewport name
    pub label: String,

    /// Where the image was written
    pub path: PathBuf,
}

/// Captures screenshots of a loaded page
pub trait ScreenshotCapturer {
    /// Captures zero or more screenshots of the page
    ///
    /// # Arguments
    ///
    /// * `page` - The loaded page handle (its `url` field is the page's URL)
    /// * `index` - The page's sequential number within the crawl
    fn capture(
        &mut self,
        page: &RenderedPage,
        index: u32,
    ) -> impl Future<Output = anyhow::Result<Vec<ScreenshotRef>>>;
}

/// Runs a performance audit against a page's URL
pub trait LighthouseAuditor {
    /// Audits the URL and returns the tool's result payload
    ///
    /// # Arguments
    ///
    /// * `url` - The page's URL
    /// * `index` - The page's sequential number within the crawl
    fn audit(
        &mut self,
        url: &Url,
        index: u32,
    ) -> impl Future<Output = anyhow::Result<AuditResult>>;
}

/// Capturer that takes no screenshots
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapturer;

impl ScreenshotCapturer for NoopCapturer {
    async fn capture(
        &mut self,
        _page: &RenderedPage,
        _index: u32,
    ) -> anyhow::Result<Vec<ScreenshotRef>> {
        Ok(Vec::new())
    }
}

/// Auditor that audits nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuditor;

impl LighthouseAuditor for NoopAuditor {
    async fn audit(&mut self, _url: &Url, _index: u32) -> anyhow::Result<AuditResult> {
        Ok(AuditResult::Null)
    }
}
