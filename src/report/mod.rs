//! Output module for crawl statistics and reports
//!
//! This module holds the result types a crawl produces and the two ways they
//! leave the process: a console summary and a JSON report file.

mod stats;
mod summary;

pub use stats::{CrawlStats, PageRecord};
pub use summary::{print_summary, write_json_report};
