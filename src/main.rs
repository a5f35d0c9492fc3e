//! Site-Surveyor main entry point
//!
//! This is the command-line interface for the Site-Surveyor crawler.

use clap::Parser;
use site_surveyor::config::{load_config, Config};
use site_surveyor::crawler::crawl;
use site_surveyor::report::{print_summary, write_json_report};
use site_surveyor::url::DomainPolicy;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Surveyor: breadth-first single-site crawler
///
/// Crawls a website starting from the seed URL, staying on the seed's
/// domain, up to a page budget, and prints statistics about the pages it
/// visited.
#[derive(Parser, Debug)]
#[command(name = "site-surveyor")]
#[command(version)]
#[command(about = "Breadth-first single-site crawler", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "URL")]
    start_url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of pages to crawl
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Page navigation timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Settle delay after page load, in seconds
    #[arg(long, value_name = "SECS")]
    wait_secs: Option<u64>,

    /// Treat subdomains of the seed host as in-scope
    #[arg(long)]
    include_subdomains: bool,

    /// Write the crawl statistics as JSON to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    tracing::info!(
        "Crawling {} (budget: {} pages, timeout: {}ms, settle: {}s)",
        cli.start_url,
        config.crawler.max_pages,
        config.crawler.timeout_ms,
        config.crawler.wait_secs
    );

    let stats = crawl(&config.crawler, &cli.start_url).await?;

    print_summary(&stats);

    let report_path = cli
        .report
        .clone()
        .or_else(|| config.output.report_path.as_ref().map(PathBuf::from));

    if let Some(path) = report_path {
        write_json_report(&stats, &path)?;
        println!("\nReport written to: {}", path.display());
    }

    Ok(())
}

/// Loads the config file (if given) and applies CLI flag overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.crawler.timeout_ms = timeout_ms;
    }
    if let Some(wait_secs) = cli.wait_secs {
        config.crawler.wait_secs = wait_secs;
    }
    if cli.include_subdomains {
        config.crawler.domain_policy = DomainPolicy::IncludeSubdomains;
    }

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_surveyor=info,warn"),
            1 => EnvFilter::new("site_surveyor=debug,info"),
            2 => EnvFilter::new("site_surveyor=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
