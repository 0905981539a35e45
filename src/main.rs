// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Kaiku - Reflected XSS Scanner for Inline JavaScript
 * Standalone CLI: probes pages for canary reflections inside inline
 * script variable assignments
 *
 * (c) 2026 Bountyy Oy
 */

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn, Level};

use kaiku_scanner::config;
use kaiku_scanner::http_client::ClientProvider;
use kaiku_scanner::rate_limiter::RateGate;
use kaiku_scanner::reporting::{self, ReportFormat};
use kaiku_scanner::scanners::InlineJsScanner;
use kaiku_scanner::worker::WorkerPool;

/// Kaiku - find reflected XSS in inline JavaScript.
#[derive(Parser)]
#[command(name = "kaiku")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version = "1.0.0")]
#[command(about = "Find reflected XSS in inline JavaScript", long_about = None)]
struct Cli {
    /// File containing target URLs, one per line
    #[arg(short, long)]
    list: PathBuf,

    /// Canary string injected as the query parameter value
    #[arg(short = 'c', long)]
    canary: String,

    /// Number of concurrent workers (overrides the config file)
    #[arg(short = 'n', long)]
    concurrency: Option<usize>,

    /// YAML configuration file (patterns, proxies, rate limit)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// File to write output to (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode - suppress the banner
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
    Html,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Html => ReportFormat::Html,
        }
    }
}

fn print_banner() {
    print!("\x1b[92m");
    println!(r"    __         _ __         ");
    println!(r"   / /______ _(_) /____  __ ");
    println!(r"  / //_/ __ `/ / //_/ / / / ");
    print!("\x1b[91m");
    println!(r" / ,< / /_/ / / ,< / /_/ /  ");
    println!(r"/_/|_|\__,_/_/_/|_|\__,_/   ");
    print!("\x1b[0m");
    println!();
    print!("\x1b[1m\x1b[97m");
    println!("  Reflected XSS in Inline JavaScript");
    print!("\x1b[0m\x1b[92m");
    println!("  v1.0 - (c) 2026 Bountyy Oy");
    print!("\x1b[0m");
    println!();
}

fn init_tracing(cli: &Cli) {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    if !cli.quiet {
        print_banner();
    }

    // Configuration and target list problems are fatal before any
    // scanning starts.
    let mut settings = config::load_settings(cli.config.as_deref())?;
    if let Some(concurrency) = cli.concurrency {
        settings.concurrency = concurrency;
        settings.validate()?;
    }

    let targets = config::read_targets(&cli.list)?;
    if targets.is_empty() {
        warn!("Target list {} contains no URLs", cli.list.display());
    }

    // One cancellable context for the whole run, honored at every
    // rate-token wait. Interrupting abandons queued targets; whatever was
    // already found is still rendered.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received; abandoning queued targets");
                cancel.cancel();
            }
        });
    }

    let gate = Arc::new(RateGate::new(settings.rate_limit));
    let provider = Arc::new(ClientProvider::new(
        &settings.proxies,
        gate,
        cancel.clone(),
    )?);
    let scanner = Arc::new(InlineJsScanner::new(&cli.canary, &settings.patterns));

    info!(
        "Starting scan: {} target(s), {} worker(s), {} req/s, {} proxies",
        targets.len(),
        settings.concurrency,
        settings.rate_limit,
        settings.proxies.len()
    );

    let started = Instant::now();
    let pool = WorkerPool::new(scanner, provider, settings.concurrency);
    let outcome = pool.run(targets).await;

    reporting::write_report(&outcome.findings, cli.format.into(), cli.output.as_deref()).await?;

    info!(
        "Processing complete: {} URL(s) processed, {} finding(s) in {:.1}s",
        outcome.processed,
        outcome.findings.len(),
        started.elapsed().as_secs_f64()
    );

    Ok(())
}
