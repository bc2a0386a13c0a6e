//! Scraper for the card-based listing pages used by Veridica.
//!
//! Listing pages render each article as a Bootstrap card:
//!
//! ```html
//! <div class="card">
//!   <a href="/stiri/..."><img src="..."></a>
//!   <h5 class="card-title"><a href="...">Title</a></h5>
//!   <p class="card-text">Teaser</p>
//!   <div class="col-10"><strong>Author</strong> <span class="text-muted">Date</span></div>
//! </div>
//! ```
//!
//! # URL Pattern
//!
//! Page 1 is the section URL itself; later pages add `?page=N`. Paging stops
//! at the first page that renders no cards.

use crate::models::{ArticleRecord, TrustedSource};
use chrono::Utc;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// CSS selectors for the card layout.
struct CardSelectors {
    card: Selector,
    anchor: Selector,
    image: Selector,
    title: Selector,
    description: Selector,
    author_info: Selector,
    author: Selector,
    date: Selector,
}

impl CardSelectors {
    fn new() -> Self {
        Self {
            card: Selector::parse("div.card").unwrap(),
            anchor: Selector::parse("a").unwrap(),
            image: Selector::parse("img").unwrap(),
            title: Selector::parse("h5.card-title").unwrap(),
            description: Selector::parse("p.card-text").unwrap(),
            author_info: Selector::parse("div.col-10").unwrap(),
            author: Selector::parse("strong").unwrap(),
            date: Selector::parse("span.text-muted").unwrap(),
        }
    }
}

/// Articles parsed from one listing page.
#[derive(Debug, Default)]
pub struct ListingPage {
    /// Number of cards on the page, including ones that were skipped.
    pub cards: usize,
    pub articles: Vec<ArticleRecord>,
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(parent: ElementRef<'_>, selector: &Selector) -> Option<String> {
    parent.select(selector).next().map(element_text)
}

/// Parse one card, or `None` if it has no anchor or no title block.
fn parse_card(
    sel: &CardSelectors,
    card: ElementRef<'_>,
    page_url: &Url,
    source: &str,
) -> Option<ArticleRecord> {
    let anchor = card.select(&sel.anchor).next()?;
    let title_block = card.select(&sel.title).next()?;

    let link = match anchor.value().attr("href") {
        Some(href) if !href.is_empty() => page_url
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string()),
        _ => String::new(),
    };
    let image_url = anchor
        .select(&sel.image)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or_default()
        .to_string();

    let (author, date) = match card.select(&sel.author_info).next() {
        Some(info) => (first_text(info, &sel.author), first_text(info, &sel.date)),
        None => (None, None),
    };

    Some(ArticleRecord {
        title: first_text(title_block, &sel.anchor).unwrap_or_default(),
        link,
        description: first_text(card, &sel.description).unwrap_or_default(),
        image_url,
        source: source.to_string(),
        author,
        date,
        scraped_at: Some(Utc::now()),
    })
}

/// Parse every card on a listing page.
pub fn parse_listing(html: &str, page_url: &Url, source: &str) -> ListingPage {
    let sel = CardSelectors::new();
    let document = Html::parse_document(html);
    let cards: Vec<ElementRef<'_>> = document.select(&sel.card).collect();
    let articles = cards
        .iter()
        .filter_map(|card| parse_card(&sel, *card, page_url, source))
        .collect();
    ListingPage {
        cards: cards.len(),
        articles,
    }
}

/// URL of listing page `page` (1-based) under `base`.
pub fn page_url(base: &Url, page: usize) -> Url {
    let mut url = base.clone();
    if page > 1 {
        url.query_pairs_mut().append_pair("page", &page.to_string());
    }
    url
}

#[instrument(level = "debug", skip(client))]
async fn fetch_page(client: &Client, url: &Url) -> Result<String, Box<dyn Error>> {
    let body = client
        .get(url.as_str())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!(bytes = body.len(), "Fetched listing page");
    Ok(body)
}

/// Scrape the paged section listing of `source`.
///
/// Failures are logged and end the crawl early; whatever was collected up
/// to that point is returned, deduplicated by link. Cards without a link
/// are dropped.
#[instrument(level = "info", skip_all, fields(source = %source.name))]
pub async fn scrape_source(client: &Client, source: &TrustedSource) -> Vec<ArticleRecord> {
    let Some(base_url) = source.base_url.as_deref() else {
        warn!("Source has no base_url; nothing to scrape");
        return Vec::new();
    };
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, %base_url, "Invalid base_url");
            return Vec::new();
        }
    };

    let mut articles = Vec::new();
    for page in 1..=source.max_pages {
        let url = page_url(&base, page);
        let html = match fetch_page(client, &url).await {
            Ok(html) => html,
            Err(e) => {
                error!(error = %e, %url, page, "Listing fetch failed; stopping");
                break;
            }
        };

        let listing = parse_listing(&html, &url, &source.name);
        if listing.cards == 0 {
            debug!(page, "No cards on page; reached the end of the listing");
            break;
        }
        info!(page, cards = listing.cards, parsed = listing.articles.len(), "Scraped page");
        articles.extend(listing.articles);
    }

    let articles = super::dedupe_by_link(articles);
    info!(count = articles.len(), "Scraped source listing");
    articles
}

/// Scrape the single fact-checking category page of `source`.
#[instrument(level = "info", skip_all, fields(source = %source.name))]
pub async fn scrape_fact_checks(client: &Client, source: &TrustedSource) -> Vec<ArticleRecord> {
    let Some(fact_check_url) = source.fact_check_url.as_deref() else {
        warn!("Source has no fact_check_url; nothing to scrape");
        return Vec::new();
    };

    let result = async {
        let url = Url::parse(fact_check_url)?;
        let html = fetch_page(client, &url).await?;
        Ok::<_, Box<dyn Error>>(parse_listing(&html, &url, &source.name))
    }
    .await;

    match result {
        Ok(listing) => {
            info!(cards = listing.cards, count = listing.articles.len(), "Scraped fact-checks");
            super::dedupe_by_link(listing.articles)
        }
        Err(e) => {
            error!(error = %e, url = %fact_check_url, "Fact-check scrape failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
          <div class="card">
            <a href="/stiri/vaccinurile-sunt-sigure"><img src="https://cdn.veridica.ro/v.jpg"></a>
            <h5 class="card-title"><a href="/stiri/vaccinurile-sunt-sigure"> Vaccinurile sunt sigure </a></h5>
            <p class="card-text">Studiu confirmă siguranța vaccinurilor</p>
            <div class="col-10"><strong>Ana Pop</strong> <span class="text-muted">12.03.2024</span></div>
          </div>
          <div class="card">
            <a href="https://www.veridica.ro/stiri/fara-imagine"></a>
            <h5 class="card-title"><a>Fără imagine</a></h5>
          </div>
          <div class="card">
            <a href="/stiri/fara-titlu"></a>
            <p class="card-text">Card fără titlu</p>
          </div>
          <div class="card"><p>Fără link</p></div>
        </body></html>
    "#;

    fn base() -> Url {
        Url::parse("https://www.veridica.ro/stiri/romania").unwrap()
    }

    #[test]
    fn test_parse_listing_full_card() {
        let listing = parse_listing(LISTING, &base(), "veridica");
        assert_eq!(listing.cards, 4);
        assert_eq!(listing.articles.len(), 2);

        let first = &listing.articles[0];
        assert_eq!(first.title, "Vaccinurile sunt sigure");
        assert_eq!(first.link, "https://www.veridica.ro/stiri/vaccinurile-sunt-sigure");
        assert_eq!(first.image_url, "https://cdn.veridica.ro/v.jpg");
        assert_eq!(first.description, "Studiu confirmă siguranța vaccinurilor");
        assert_eq!(first.author.as_deref(), Some("Ana Pop"));
        assert_eq!(first.date.as_deref(), Some("12.03.2024"));
        assert_eq!(first.source, "veridica");
        assert!(first.scraped_at.is_some());
    }

    #[test]
    fn test_parse_listing_sparse_card() {
        let listing = parse_listing(LISTING, &base(), "veridica");
        let second = &listing.articles[1];
        assert_eq!(second.title, "Fără imagine");
        assert_eq!(second.link, "https://www.veridica.ro/stiri/fara-imagine");
        assert_eq!(second.image_url, "");
        assert_eq!(second.description, "");
        assert_eq!(second.author, None);
        assert_eq!(second.date, None);
    }

    #[test]
    fn test_parse_listing_empty_page() {
        let listing = parse_listing("<html><body><p>Nimic</p></body></html>", &base(), "veridica");
        assert_eq!(listing.cards, 0);
        assert!(listing.articles.is_empty());
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url(&base(), 1).as_str(), "https://www.veridica.ro/stiri/romania");
        assert_eq!(
            page_url(&base(), 3).as_str(),
            "https://www.veridica.ro/stiri/romania?page=3"
        );
    }

    #[tokio::test]
    async fn test_scrape_source_without_base_url() {
        let source = TrustedSource {
            name: "veridica".to_string(),
            trust_level: 0.9,
            base_url: None,
            fact_check_url: None,
            max_pages: 14,
        };
        let client = Client::new();
        assert!(scrape_source(&client, &source).await.is_empty());
        assert!(scrape_fact_checks(&client, &source).await.is_empty());
    }

    #[tokio::test]
    async fn test_scrape_source_with_invalid_base_url() {
        let source = TrustedSource {
            name: "veridica".to_string(),
            trust_level: 0.9,
            base_url: Some("not a url".to_string()),
            fact_check_url: Some("also not a url".to_string()),
            max_pages: 14,
        };
        let client = Client::new();
        assert!(scrape_source(&client, &source).await.is_empty());
        assert!(scrape_fact_checks(&client, &source).await.is_empty());
    }
}
