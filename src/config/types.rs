use crate::url::DomainPolicy;
use serde::Deserialize;

/// Main configuration structure for Site-Surveyor
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of pages to crawl
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Page navigation timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Settle delay after page load, in seconds, before extraction and
    /// collaborators run
    #[serde(rename = "wait-secs")]
    pub wait_secs: u64,

    /// Whether subdomains of the seed host are in crawl scope
    #[serde(rename = "domain-policy")]
    pub domain_policy: DomainPolicy,

    /// Override for the HTTP User-Agent header
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 50,
            timeout_ms: 30_000,
            wait_secs: 2,
            domain_policy: DomainPolicy::ExactHost,
            user_agent: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to write the JSON crawl report to, if any
    #[serde(rename = "report-path")]
    pub report_path: Option<String>,
}
