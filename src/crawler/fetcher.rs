//! Page fetch adapter
//!
//! This module is the boundary between the crawl engine and whatever loads
//! pages. The core consumes the [`PageFetcher`] trait; the crate ships one
//! concrete adapter, [`HttpFetcher`], built on reqwest. A browser-automation
//! layer can satisfy the same trait without the orchestrator changing.

use crate::config::CrawlerConfig;
use crate::SurveyError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// User-Agent sent when the configuration does not override it
pub const DEFAULT_USER_AGENT: &str = concat!("site-surveyor/", env!("CARGO_PKG_VERSION"));

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// The page loaded and settled; the handle must be passed back through
    /// [`PageFetcher::close`]
    Success(RenderedPage),

    /// The page did not finish loading within the navigation timeout
    Timeout,

    /// The navigation failed: no response, an error status, or a non-HTML
    /// resource
    Failed {
        /// Error description
        reason: String,
    },
}

impl FetchOutcome {
    /// Returns true for the `Success` variant
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Handle to one loaded page
///
/// Scoped to a single fetch; the orchestrator releases it through
/// [`PageFetcher::close`] before moving to the next frontier entry.
#[derive(Debug)]
pub struct RenderedPage {
    /// Final URL after redirects
    pub url: Url,

    /// HTTP status code
    pub status: u16,

    /// Rendered document body
    pub html: String,
}

/// Boundary trait for loading pages
///
/// # Contract
///
/// - `fetch` opens an isolated per-page context (no cookies or state shared
///   between pages), navigates, waits for readiness, and applies the
///   configured settle delay before returning.
/// - On `Timeout` or `Failed` the adapter releases its per-page context
///   itself before returning.
/// - On `Success` the caller owns the handle and MUST pass it back through
///   `close` on every exit path. Every opened context is closed exactly once.
pub trait PageFetcher {
    /// Navigates to the URL and reports the outcome
    fn fetch(&mut self, url: &Url) -> impl Future<Output = FetchOutcome>;

    /// Releases the per-page context behind a successful fetch
    fn close(&mut self, page: RenderedPage) -> impl Future<Output = ()>;
}

/// HTTP fetch adapter built on reqwest
///
/// Each request runs with no cookie store, so pages are isolated from each
/// other. "Network settled" readiness for this adapter means the full
/// response body has been received; the settle delay is applied on top of
/// that, matching what a browser adapter would do after network-idle.
pub struct HttpFetcher {
    client: Client,
    settle: Duration,
}

impl HttpFetcher {
    /// Builds the adapter from the crawler configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the navigation timeout, settle delay, and
    ///   optional User-Agent override
    ///
    /// # Returns
    ///
    /// * `Ok(HttpFetcher)` - Ready to fetch
    /// * `Err(SurveyError)` - The underlying HTTP client could not be built;
    ///   this is a fatal setup failure
    pub fn new(config: &CrawlerConfig) -> Result<Self, SurveyError> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.timeout_ms))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            settle: Duration::from_secs(config.wait_secs),
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&mut self, url: &Url) -> FetchOutcome {
        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return FetchOutcome::Timeout,
            Err(e) => {
                return FetchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        let status = response.status();
        let final_url = response.url().clone();

        if status.as_u16() >= 400 {
            return FetchOutcome::Failed {
                reason: format!("HTTP {}", status.as_u16()),
            };
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.is_empty()
            && !content_type.contains("text/html")
            && !content_type.contains("application/xhtml")
        {
            return FetchOutcome::Failed {
                reason: format!("unsupported content type: {}", content_type),
            };
        }

        let html = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return FetchOutcome::Timeout,
            Err(e) => {
                return FetchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        FetchOutcome::Success(RenderedPage {
            url: final_url,
            status: status.as_u16(),
            html,
        })
    }

    async fn close(&mut self, page: RenderedPage) {
        // The HTTP adapter holds no per-page state beyond the handle itself
        drop(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_fetcher() {
        let config = CrawlerConfig::default();
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[test]
    fn test_user_agent_override() {
        let config = CrawlerConfig {
            user_agent: Some("CustomBot/2.0".to_string()),
            ..CrawlerConfig::default()
        };
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[test]
    fn test_default_user_agent_names_the_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("site-surveyor/"));
    }

    #[test]
    fn test_outcome_is_success() {
        let page = RenderedPage {
            url: Url::parse("https://example.com/").unwrap(),
            status: 200,
            html: String::new(),
        };
        assert!(FetchOutcome::Success(page).is_success());
        assert!(!FetchOutcome::Timeout.is_success());
        assert!(!FetchOutcome::Failed {
            reason: "HTTP 500".to_string()
        }
        .is_success());
    }

    // Network behavior (status handling, timeouts) is covered by the
    // wiremock-backed integration tests.
}
