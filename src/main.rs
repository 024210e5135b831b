//! Catalog-Crawl main entry point
//!
//! This is the command-line interface for the Catalog-Crawl product harvester.

use anyhow::Context;
use catalog_crawl::config::{load_config, validate, Config};
use catalog_crawl::crawler::crawl;
use catalog_crawl::output::{print_statistics, write_catalog, CatalogStatistics};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Catalog-Crawl: a product catalog harvester
///
/// Crawls a paginated product listing, extracts every colour variant,
/// normalizes prices, capacities and shipping dates, and writes the
/// deduplicated catalog as JSON.
#[derive(Parser, Debug)]
#[command(name = "catalog-crawl")]
#[command(version)]
#[command(about = "A product catalog harvester", long_about = None)]
struct Cli {
    /// Listing page to start from (overrides the configured entry URL)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Where to write the JSON catalog (overrides the configured path)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Pretty-print the JSON catalog
    #[arg(long)]
    pretty: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved configuration without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("catalog_crawl=info,warn"),
            1 => EnvFilter::new("catalog_crawl=debug,info"),
            2 => EnvFilter::new("catalog_crawl=trace,debug"),
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

/// Loads the config file if given, then applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(url) = &cli.url {
        config.crawler.entry_url = url.clone();
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }
    if cli.pretty {
        config.output.pretty = true;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Catalog-Crawl Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Entry URL: {}", config.crawler.entry_url);
    println!("  Base path: {}", config.crawler.base_path);
    println!("  Timeout: {}s", config.crawler.timeout_secs);

    println!("\nUser Agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Path: {}", config.output.path);
    println!("  Pretty: {}", config.output.pretty);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
///
/// The catalog is only written when every page was fetched.
async fn handle_crawl(config: &Config, quiet: bool) -> anyhow::Result<()> {
    let outcome = match crawl(config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e).context("Crawl aborted, no catalog written");
        }
    };

    write_catalog(&outcome.products, &config.output)
        .with_context(|| format!("Failed to write catalog to {}", config.output.path))?;

    let stats = CatalogStatistics::from_outcome(&outcome);
    tracing::info!(
        "{} variants of {} products, {} available",
        stats.total_products,
        stats.distinct_titles,
        stats.available
    );
    if !quiet {
        print_statistics(&stats);
    }

    Ok(())
}
