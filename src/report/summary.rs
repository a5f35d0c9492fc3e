//! Console summary and JSON export for crawl results

use crate::report::CrawlStats;
use crate::SurveyError;
use std::path::Path;

/// Prints a crawl summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The finalized crawl statistics
pub fn print_summary(stats: &CrawlStats) {
    println!("=== Crawl Summary ===\n");

    println!("Start URL: {}", stats.start_url);
    println!("Started:   {}", stats.start_time.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Finished:  {}", stats.end_time.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Duration:  {:.2}s", stats.duration_seconds);
    println!("Pages crawled: {}", stats.pages_crawled);

    if stats.pages.is_empty() {
        return;
    }

    let with_screenshots = stats
        .pages
        .iter()
        .filter(|p| !p.screenshots.is_empty())
        .count();
    let with_audits = stats.pages.iter().filter(|p| p.lighthouse.is_some()).count();
    let total_screenshots: usize = stats.pages.iter().map(|p| p.screenshots.len()).sum();

    if with_screenshots > 0 {
        println!(
            "Screenshots: {} across {} pages",
            total_screenshots, with_screenshots
        );
    }
    if with_audits > 0 {
        println!("Audited pages: {}", with_audits);
    }

    println!("\nPages:");
    for page in &stats.pages {
        match &page.title {
            Some(title) => println!("  {:>4}. {} ({})", page.number + 1, page.url, title),
            None => println!("  {:>4}. {}", page.number + 1, page.url),
        }
    }
}

/// Writes the crawl statistics as pretty-printed JSON
///
/// # Arguments
///
/// * `stats` - The finalized crawl statistics
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - Report written
/// * `Err(SurveyError)` - Serialization or IO failure
pub fn write_json_report(stats: &CrawlStats, path: &Path) -> Result<(), SurveyError> {
    let json = serde_json::to_string_pretty(stats)?;
    std::fs::write(path, json)?;
    Ok(())
}
