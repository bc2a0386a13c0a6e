//! Scrapers for fact-checking outlets.
//!
//! Each trusted source in the registry carries its own scrape configuration.
//! Scraping follows a consistent pattern:
//!
//! 1. **Listing**: walk the paged section listing (`base_url`, `?page=2`, ...)
//! 2. **Fact-checks**: optionally read the single fact-check category page
//!
//! # Supported Layouts
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Veridica | [`veridica`] | HTML scraping | Bootstrap card listings, paged with `?page=N` |
//!
//! Scrapers never fail the run: HTTP and parse errors are logged and the
//! source simply contributes fewer (or no) articles. There is no retry.

pub mod veridica;

use crate::models::ArticleRecord;
use crate::trust::TrustRegistry;
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const PARALLEL_SOURCES: usize = 4;

/// HTTP client shared by all scrapers.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Drop records without a link, then keep the first record for each link.
pub fn dedupe_by_link(articles: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    let before = articles.len();
    let articles: Vec<ArticleRecord> = articles
        .into_iter()
        .filter(|a| {
            if a.link.is_empty() {
                debug!(title = %a.title, "Dropping article without a link");
            }
            !a.link.is_empty()
        })
        .unique_by(|a| a.link.clone())
        .collect();
    if articles.len() < before {
        debug!(before, after = articles.len(), "Deduplicated articles by link");
    }
    articles
}

/// Scrape one registered source: the paged listing, plus the fact-check
/// page when `include_fact_checks` is set.
#[instrument(level = "info", skip(client, registry))]
pub async fn scrape_named(
    client: &Client,
    registry: &TrustRegistry,
    name: &str,
    include_fact_checks: bool,
) -> Vec<ArticleRecord> {
    let Some(source) = registry.get(name) else {
        warn!("Source is not in the trusted registry");
        return Vec::new();
    };

    let mut articles = veridica::scrape_source(client, source).await;
    if include_fact_checks {
        articles.extend(veridica::scrape_fact_checks(client, source).await);
    }
    dedupe_by_link(articles)
}

/// Scrape every registered source concurrently.
///
/// Returns `(source name, articles)` pairs in completion order.
#[instrument(level = "info", skip_all)]
pub async fn scrape_all(
    client: &Client,
    registry: &TrustRegistry,
    include_fact_checks: bool,
) -> Vec<(String, Vec<ArticleRecord>)> {
    let results: Vec<(String, Vec<ArticleRecord>)> = stream::iter(registry.names())
        .map(|name| async move {
            let articles = scrape_named(client, registry, name, include_fact_checks).await;
            (name.to_string(), articles)
        })
        .buffer_unordered(PARALLEL_SOURCES)
        .collect()
        .await;

    let total: usize = results.iter().map(|(_, a)| a.len()).sum();
    info!(sources = results.len(), total, "Scraped all sources");
    results
}
