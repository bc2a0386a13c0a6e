//! Plain-text reports printed by the CLI.
//!
//! Rendering is kept separate from printing so the reports can be tested.

use crate::models::{SimilarArticle, VeracityResult};
use std::fmt::Write;

/// How many matches the verification report lists.
pub const TOP_MATCHES: usize = 3;

/// Verdict, confidence and top matches for a verified claim.
pub fn veracity_report(result: &VeracityResult) -> String {
    let mut out = String::new();
    writeln!(out, "Verification Results:").unwrap();
    writeln!(out, "Verdict: {}", result.verdict).unwrap();
    writeln!(out, "Confidence: {:.2}", result.confidence).unwrap();
    writeln!(out, "Veracity score: {:.2}", result.veracity_score).unwrap();

    if !result.matches.is_empty() {
        writeln!(out, "\nMatching Articles:").unwrap();
        for m in result.matches.iter().take(TOP_MATCHES) {
            writeln!(out, "\nTitle: {}", m.article.title).unwrap();
            writeln!(out, "Match Score: {:.2}", m.match_score).unwrap();
            writeln!(out, "Link: {}", m.article.link).unwrap();
        }
    }
    out
}

fn similar_section(out: &mut String, heading: &str, hits: &[SimilarArticle]) {
    if hits.is_empty() {
        return;
    }
    writeln!(out, "\n{heading}:").unwrap();
    for (idx, hit) in hits.iter().enumerate() {
        writeln!(out, "\n{}. {}", idx + 1, hit.title).unwrap();
        writeln!(out, "   Similarity: {:.2}", hit.similarity).unwrap();
        writeln!(out, "   Link: {}", hit.link).unwrap();
        writeln!(out, "   Description: {}", hit.description).unwrap();
    }
}

/// Both ranked lists from the similar-article finder, reported separately.
pub fn similar_report(claim: &str, good: &[SimilarArticle], bad: &[SimilarArticle]) -> String {
    let mut out = String::new();
    writeln!(out, "Analyzing: '{claim}'").unwrap();
    writeln!(out, "\nFound {} relevant articles", good.len() + bad.len()).unwrap();

    similar_section(&mut out, "Verified reporting", good);
    similar_section(&mut out, "Known disinformation", bad);

    if good.is_empty() && bad.is_empty() {
        writeln!(out, "\nNo similar articles found.").unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArticleRecord, MatchResult, Verdict};

    fn matched(title: &str, score: f64) -> MatchResult {
        MatchResult {
            article: ArticleRecord {
                title: title.to_string(),
                link: format!("https://veridica.ro/{title}"),
                ..Default::default()
            },
            match_score: score,
            title_similarity: score,
            description_similarity: score,
            keyword_overlap: score,
        }
    }

    fn hit(title: &str, similarity: f64, is_bad: bool) -> SimilarArticle {
        SimilarArticle {
            title: title.to_string(),
            link: format!("https://veridica.ro/{title}"),
            description: "descriere".to_string(),
            similarity,
            is_bad,
        }
    }

    #[test]
    fn test_veracity_report_lists_top_three() {
        let result = VeracityResult {
            veracity_score: 0.72,
            confidence: 0.8,
            matches: vec![
                matched("a", 0.9),
                matched("b", 0.8),
                matched("c", 0.7),
                matched("d", 0.6),
            ],
            verdict: Verdict::True,
        };
        let report = veracity_report(&result);
        assert!(report.contains("Verdict: true"));
        assert!(report.contains("Confidence: 0.80"));
        assert!(report.contains("Title: c"));
        assert!(!report.contains("Title: d"));
        assert!(report.contains("Match Score: 0.90"));
    }

    #[test]
    fn test_veracity_report_unknown() {
        let report = veracity_report(&VeracityResult::unknown());
        assert!(report.contains("Verdict: unknown"));
        assert!(!report.contains("Matching Articles"));
    }

    #[test]
    fn test_similar_report_sections() {
        let report = similar_report(
            "vaccinuri",
            &[hit("bun", 0.8, false)],
            &[hit("rau", 0.4, true), hit("rau2", 0.2, true)],
        );
        assert!(report.contains("Found 3 relevant articles"));
        assert!(report.contains("Verified reporting:"));
        assert!(report.contains("Known disinformation:"));
        assert!(report.contains("2. rau2"));
        assert!(report.contains("Similarity: 0.80"));
        assert!(!report.contains("No similar articles"));
    }

    #[test]
    fn test_similar_report_empty() {
        let report = similar_report("vaccinuri", &[], &[]);
        assert!(report.contains("No similar articles found."));
        assert!(!report.contains("Verified reporting"));
    }
}
