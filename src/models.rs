//! Data models for scraped articles, trusted sources, and scoring results.
//!
//! This module defines the records that flow through the application:
//! - [`ArticleRecord`]: An article card as scraped from a fact-checking outlet
//! - [`TrustedSource`]: A configured outlet and how much we trust it
//! - [`MatchResult`] / [`VeracityResult`]: Output of the veracity evaluator
//! - [`SimilarArticle`]: Output of the TF-IDF similar-article finder
//!
//! Optional JSON keys are modeled as `Option` or `#[serde(default)]` fields so
//! the scoring code never has to guess at missing values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single article as scraped from a listing page.
///
/// Records are immutable once scraped. Every field except `title` may be
/// missing from older store files, so all of them default to empty.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The article headline.
    #[serde(default)]
    pub title: String,
    /// Absolute URL of the full article.
    #[serde(default)]
    pub link: String,
    /// Teaser text shown on the listing card.
    #[serde(default)]
    pub description: String,
    /// Thumbnail image URL, empty when the card has none.
    #[serde(default)]
    pub image_url: String,
    /// Name of the trusted source this record came from.
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date as printed on the card (free-form text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl ArticleRecord {
    /// Title and description joined by a single space, the text the
    /// scorers compare claims against.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

fn default_max_pages() -> usize {
    14
}

/// A fact-checking outlet and its scrape configuration.
///
/// The registry file is keyed by source name, so `name` is filled in from
/// the key after deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrustedSource {
    #[serde(skip)]
    pub name: String,
    /// Confidence weight in `[0, 1]`.
    pub trust_level: f64,
    /// First listing page; later pages append `?page=N`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Dedicated fact-checking category page, scraped as a single page.
    #[serde(default)]
    pub fact_check_url: Option<String>,
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

/// Coarse classification of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    True,
    LikelyTrue,
    LikelyFalse,
    False,
    Unknown,
}

impl Verdict {
    /// Bucket a veracity score: `> 0.7` true, `> 0.4` likely true,
    /// `> 0.2` likely false, anything else false.
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Verdict::True
        } else if score > 0.4 {
            Verdict::LikelyTrue
        } else if score > 0.2 {
            Verdict::LikelyFalse
        } else {
            Verdict::False
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "true",
            Verdict::LikelyTrue => "likely_true",
            Verdict::LikelyFalse => "likely_false",
            Verdict::False => "false",
            Verdict::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An article admitted as a match for a claim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub article: ArticleRecord,
    /// `0.4 * title + 0.4 * description + 0.2 * keyword_overlap`.
    pub match_score: f64,
    pub title_similarity: f64,
    pub description_similarity: f64,
    pub keyword_overlap: f64,
}

/// Outcome of a single veracity evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VeracityResult {
    pub veracity_score: f64,
    pub confidence: f64,
    /// Sorted by descending `match_score`.
    pub matches: Vec<MatchResult>,
    pub verdict: Verdict,
}

impl VeracityResult {
    /// The result reported when nothing in the corpus matched.
    pub fn unknown() -> Self {
        Self {
            veracity_score: 0.0,
            confidence: 0.0,
            matches: Vec::new(),
            verdict: Verdict::Unknown,
        }
    }
}

/// An article found by the TF-IDF finder, tagged with the corpus it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarArticle {
    pub title: String,
    pub link: String,
    pub description: String,
    pub similarity: f64,
    /// `true` when the article came from the disinformation corpus.
    pub is_bad: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_record_deserialization_with_missing_keys() {
        let json = r#"{"title": "Titlu", "link": "https://veridica.ro/a"}"#;
        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Titlu");
        assert_eq!(article.description, "");
        assert_eq!(article.author, None);
        assert_eq!(article.scraped_at, None);
    }

    #[test]
    fn test_article_record_serialization_skips_empty_optionals() {
        let article = ArticleRecord {
            title: "Știre".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("Știre"));
        assert!(!json.contains("author"));
        assert!(!json.contains("scraped_at"));
    }

    #[test]
    fn test_combined_text() {
        let article = ArticleRecord {
            title: "Titlu".to_string(),
            description: "Descriere".to_string(),
            ..Default::default()
        };
        assert_eq!(article.combined_text(), "Titlu Descriere");
    }

    #[test]
    fn test_trusted_source_defaults() {
        let source: TrustedSource = serde_json::from_str(r#"{"trust_level": 0.9}"#).unwrap();
        assert_eq!(source.trust_level, 0.9);
        assert_eq!(source.max_pages, 14);
        assert_eq!(source.base_url, None);
        assert_eq!(source.name, "");
    }

    #[test]
    fn test_verdict_buckets() {
        assert_eq!(Verdict::from_score(0.71), Verdict::True);
        assert_eq!(Verdict::from_score(0.7), Verdict::LikelyTrue);
        assert_eq!(Verdict::from_score(0.41), Verdict::LikelyTrue);
        assert_eq!(Verdict::from_score(0.4), Verdict::LikelyFalse);
        assert_eq!(Verdict::from_score(0.21), Verdict::LikelyFalse);
        assert_eq!(Verdict::from_score(0.2), Verdict::False);
        assert_eq!(Verdict::from_score(0.0), Verdict::False);
    }

    #[test]
    fn test_verdict_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Verdict::LikelyTrue).unwrap(), "\"likely_true\"");
        assert_eq!(Verdict::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_unknown_result() {
        let result = VeracityResult::unknown();
        assert_eq!(result.veracity_score, 0.0);
        assert_eq!(result.confidence, 0.0);
        assert!(result.matches.is_empty());
        assert_eq!(result.verdict, Verdict::Unknown);
    }
}
