//! # Fact Check News
//!
//! Scrapes Romanian fact-checking outlets into a local JSON store and scores
//! arbitrary claims against what those outlets have already reported.
//!
//! ## Usage
//!
//! ```sh
//! fact_check_news scrape
//! fact_check_news verify "Vaccinurile sunt sigure"
//! fact_check_news analyze "Vaccinurile conțin cipuri"
//! ```
//!
//! ## Architecture
//!
//! 1. **Scraping**: card listings of each trusted source become [`models::ArticleRecord`]s
//! 2. **Preprocessing**: claims and articles are normalized, stemmed or lemmatized
//! 3. **Scoring**: sequence-ratio and keyword overlap (verify) or TF-IDF cosine (analyze)
//! 4. **Reporting**: verdict and ranked matches are printed to stdout
//!
//! Logs go to stderr; set `RUST_LOG=debug` for per-article scores.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod analyzer;
mod cli;
mod models;
mod nlp;
mod outputs;
mod scrapers;
mod similarity;
mod trust;
mod utils;
mod veracity;

use analyzer::ArticleAnalyzer;
use cli::{Cli, Command, GlobalOpts, Strategy};
use nlp::NlpContext;
use outputs::{console, json};
use similarity::TfIdfCosine;
use trust::TrustRegistry;
use utils::{ensure_writable_dir, join_claim, prompt_line, truncate_for_log};
use veracity::VeracityEvaluator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let registry = TrustRegistry::load(&args.global.sources).await;

    match args.command {
        Command::Scrape {
            source,
            fact_checks,
        } => run_scrape(&args.global, &registry, source.as_deref(), fact_checks).await?,
        Command::Verify {
            text,
            source,
            refresh,
            strategy,
        } => run_verify(&args.global, &registry, text, &source, refresh, strategy).await?,
        Command::Analyze { text, threshold } => run_analyze(&args.global, text, threshold).await?,
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

/// Build the language context, attaching the lemma table when configured.
///
/// An unreadable table is logged and lemmatization falls back to stemming.
async fn build_nlp(global: &GlobalOpts) -> NlpContext {
    let nlp = NlpContext::romanian();
    match global.lemmas.as_deref() {
        Some(path) => match nlp::load_lemma_table(path).await {
            Ok(table) => nlp.with_lemmas(table),
            Err(e) => {
                warn!(path, error = %e, "Failed to load lemma table; using stems");
                nlp
            }
        },
        None => nlp,
    }
}

/// Save a scrape result, leaving the existing store untouched when empty.
async fn store_scraped(global: &GlobalOpts, source: &str, articles: &[models::ArticleRecord]) {
    if articles.is_empty() {
        warn!(source, "No new articles were scraped");
        return;
    }
    let path = json::source_path(&global.data_dir, source);
    if let Err(e) = json::save_articles(&path, articles).await {
        error!(source, path = %path.display(), error = %e, "Failed to save articles");
    }
}

/// Prefer freshly scraped articles, keeping the stored ones when the scrape
/// came back empty.
fn fresh_or_stored(
    scraped: Vec<models::ArticleRecord>,
    stored: Vec<models::ArticleRecord>,
) -> Vec<models::ArticleRecord> {
    if scraped.is_empty() && !stored.is_empty() {
        warn!(stored = stored.len(), "Scrape returned nothing; using stored articles");
        stored
    } else {
        scraped
    }
}

#[instrument(level = "info", skip(global, registry))]
async fn run_scrape(
    global: &GlobalOpts,
    registry: &TrustRegistry,
    source: Option<&str>,
    fact_checks: bool,
) -> Result<(), Box<dyn Error>> {
    if let Err(e) = ensure_writable_dir(&global.data_dir).await {
        error!(path = %global.data_dir, error = %e, "Data directory is not writable");
        return Err(e);
    }
    let client = scrapers::build_client()?;

    match source {
        Some(name) => {
            let articles = scrapers::scrape_named(&client, registry, name, fact_checks).await;
            store_scraped(global, name, &articles).await;
            println!("{name}: {} articles", articles.len());
        }
        None => {
            if registry.is_empty() {
                warn!(path = %global.sources, "No trusted sources configured");
            }
            for (name, articles) in scrapers::scrape_all(&client, registry, fact_checks).await {
                store_scraped(global, &name, &articles).await;
                println!("{name}: {} articles", articles.len());
            }
        }
    }
    Ok(())
}

#[instrument(level = "info", skip(global, registry, text))]
async fn run_verify(
    global: &GlobalOpts,
    registry: &TrustRegistry,
    text: Vec<String>,
    source: &str,
    refresh: bool,
    strategy: Strategy,
) -> Result<(), Box<dyn Error>> {
    let claim = if text.is_empty() {
        prompt_line("Enter the news to check: ").await?
    } else {
        join_claim(&text)
    };
    if claim.is_empty() {
        warn!("No claim supplied; nothing to verify");
        return Ok(());
    }
    info!(claim = %truncate_for_log(&claim, 120), "Verifying claim");

    let stored = json::load_articles(&json::source_path(&global.data_dir, source)).await;
    let articles = if refresh || stored.is_empty() {
        info!(source, stored = stored.len(), "Scraping source before verification");
        let client = scrapers::build_client()?;
        let scraped = scrapers::scrape_named(&client, registry, source, false).await;
        store_scraped(global, source, &scraped).await;
        fresh_or_stored(scraped, stored)
    } else {
        stored
    };

    let nlp = build_nlp(global).await;
    let result = match strategy {
        Strategy::Sequence => {
            VeracityEvaluator::new(&nlp, registry).evaluate(&claim, &articles, source)
        }
        Strategy::Tfidf => {
            VeracityEvaluator::with_strategy(&nlp, registry, TfIdfCosine::new(&nlp))
                .evaluate(&claim, &articles, source)
        }
    };

    println!("{}", console::veracity_report(&result));
    Ok(())
}

#[instrument(level = "info", skip(global, text))]
async fn run_analyze(
    global: &GlobalOpts,
    text: Vec<String>,
    threshold: f64,
) -> Result<(), Box<dyn Error>> {
    let claim = join_claim(&text);
    if claim.is_empty() {
        println!("Usage: fact_check_news analyze 'text to analyze'");
        return Ok(());
    }

    let good_articles =
        json::load_articles(&json::corpus_path(&global.data_dir, json::GOOD_CORPUS)).await;
    let bad_articles =
        json::load_articles(&json::corpus_path(&global.data_dir, json::BAD_CORPUS)).await;
    info!(good = good_articles.len(), bad = bad_articles.len(), "Loaded corpora");

    if good_articles.is_empty() && bad_articles.is_empty() {
        println!("No articles found to analyze");
        return Ok(());
    }

    let nlp = build_nlp(global).await;
    let analyzer = ArticleAnalyzer::new(&nlp);
    let good_matches = analyzer.find_similar(&claim, &good_articles, false, threshold);
    let bad_matches = analyzer.find_similar(&claim, &bad_articles, true, threshold);

    println!(
        "{}",
        console::similar_report(&claim, &good_matches, &bad_matches)
    );
    Ok(())
}
