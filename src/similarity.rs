//! Pairwise text similarity strategies.
//!
//! The evaluator only depends on the [`SimilarityStrategy`] trait, so the
//! character-level [`SequenceRatio`] and the lemma-based [`TfIdfCosine`] can
//! be swapped without touching the scoring logic.
//!
//! | Strategy | Input | Model |
//! |----------|-------|-------|
//! | [`SequenceRatio`] | two strings, compared char by char | `2 * matched / (len(a) + len(b))` |
//! | [`TfIdfCosine`] | two strings, lemmatized first | TF-IDF fit on the pair, cosine |

use crate::nlp::NlpContext;
use similar::TextDiff;
use std::collections::BTreeMap;

/// A symmetric similarity measure returning a value in `[0, 1]`.
pub trait SimilarityStrategy {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Similarity of `a` and `b`; `1.0` means identical.
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Diff-based ratio over Unicode scalar values.
///
/// Matched characters come from an optimal Myers diff, so the ratio is
/// exactly symmetric. Empty input on either side scores `0.0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceRatio;

impl SimilarityStrategy for SequenceRatio {
    fn name(&self) -> &str {
        "sequence-ratio"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let ratio = TextDiff::from_chars(a, b).ratio() as f64;
        ratio.clamp(0.0, 1.0)
    }
}

/// Cosine similarity of TF-IDF vectors built from lemmatized text.
///
/// The vectorizer is fit on exactly the two texts being compared, so the
/// IDF weights only distinguish "shared" from "not shared" terms and are not
/// comparable across different pairs. Scores are good for ranking articles
/// against one claim, not as absolute probabilities.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfCosine<'a> {
    nlp: &'a NlpContext,
}

impl<'a> TfIdfCosine<'a> {
    pub fn new(nlp: &'a NlpContext) -> Self {
        Self { nlp }
    }
}

impl SimilarityStrategy for TfIdfCosine<'_> {
    fn name(&self) -> &str {
        "tfidf-cosine"
    }

    fn score(&self, a: &str, b: &str) -> f64 {
        tfidf_cosine(&self.nlp.lemmatize(a), &self.nlp.lemmatize(b))
    }
}

/// Raw term counts, keeping only terms of two or more characters.
fn term_counts(terms: &[String]) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for term in terms.iter().filter(|t| t.chars().count() >= 2) {
        *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine similarity of two pre-tokenized documents under a TF-IDF model
/// fit on just those two documents.
///
/// Uses smoothed IDF, `ln((1 + n) / (1 + df)) + 1` with `n = 2`, and
/// L2-normalized rows. Returns `0.0` if either document has no terms.
pub fn tfidf_cosine(doc_a: &[String], doc_b: &[String]) -> f64 {
    let counts_a = term_counts(doc_a);
    let counts_b = term_counts(doc_b);
    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    let idf = |term: &str| {
        let df = counts_a.contains_key(term) as u8 + counts_b.contains_key(term) as u8;
        (3.0 / (1.0 + df as f64)).ln() + 1.0
    };

    let weigh = |counts: &BTreeMap<&str, f64>| -> BTreeMap<String, f64> {
        counts
            .iter()
            .map(|(term, tf)| (term.to_string(), tf * idf(*term)))
            .collect()
    };
    let weights_a = weigh(&counts_a);
    let weights_b = weigh(&counts_b);

    let norm = |w: &BTreeMap<String, f64>| w.values().map(|x| x * x).sum::<f64>().sqrt();
    let (norm_a, norm_b) = (norm(&weights_a), norm(&weights_b));
    if norm_a <= f64::EPSILON || norm_b <= f64::EPSILON {
        return 0.0;
    }

    let dot: f64 = weights_a
        .iter()
        .filter_map(|(term, wa)| weights_b.get(term).map(|wb| wa * wb))
        .sum();
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_sequence_ratio_identity() {
        let s = SequenceRatio;
        for text in ["a", "vaccinurile sunt sigure", "știri false despre vaccinuri"] {
            assert_eq!(s.score(text, text), 1.0, "identity failed for {text:?}");
        }
    }

    #[test]
    fn test_sequence_ratio_symmetric() {
        let s = SequenceRatio;
        let pairs = [
            ("vaccinurile sunt sigure", "studiu confirmă siguranța vaccinurilor"),
            ("mere banane", "calculator internet"),
            ("abcd", "bcde"),
            ("guvernul a demisionat", "guvernul nu a demisionat ieri"),
        ];
        for (a, b) in pairs {
            assert_eq!(s.score(a, b), s.score(b, a), "asymmetric for {a:?} / {b:?}");
        }
    }

    #[test]
    fn test_sequence_ratio_prefix() {
        // 23 shared chars out of 23 + 36.
        let score = SequenceRatio.score(
            "vaccinurile sunt sigure",
            "vaccinurile sunt sigure și eficiente",
        );
        assert!((score - 46.0 / 59.0).abs() < 1e-6, "got {score}");
    }

    #[test]
    fn test_sequence_ratio_empty() {
        assert_eq!(SequenceRatio.score("", ""), 0.0);
        assert_eq!(SequenceRatio.score("abc", ""), 0.0);
        assert_eq!(SequenceRatio.score("", "abc"), 0.0);
    }

    #[test]
    fn test_sequence_ratio_disjoint() {
        assert_eq!(SequenceRatio.score("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_tfidf_identical_documents() {
        let doc = terms("vaccin sigur eficient");
        assert!((tfidf_cosine(&doc, &doc) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tfidf_disjoint_documents() {
        assert_eq!(tfidf_cosine(&terms("mar banan"), &terms("calculator internet")), 0.0);
    }

    #[test]
    fn test_tfidf_partial_overlap_matches_reference_weights() {
        // a = {x, y}, b = {x, z}: shared x has idf 1, the others ln(1.5) + 1.
        let a = terms("xx yy");
        let b = terms("xx zz");
        let w = 1.5f64.ln() + 1.0;
        let expected = 1.0 / (1.0 + w * w);
        assert!((tfidf_cosine(&a, &b) - expected).abs() < 1e-9);
        assert_eq!(tfidf_cosine(&a, &b), tfidf_cosine(&b, &a));
    }

    #[test]
    fn test_tfidf_ignores_single_char_terms() {
        assert_eq!(tfidf_cosine(&terms("a b c"), &terms("a b c")), 0.0);
    }

    #[test]
    fn test_tfidf_empty() {
        assert_eq!(tfidf_cosine(&[], &terms("vaccin")), 0.0);
    }

    #[test]
    fn test_tfidf_strategy_lemmatizes() {
        let nlp = NlpContext::romanian();
        let strategy = TfIdfCosine::new(&nlp);
        let score = strategy.score(
            "Vaccinurile sunt sigure!",
            "vaccinurile, SUNT sigure",
        );
        assert!((score - 1.0).abs() < 1e-9);
        assert_eq!(strategy.name(), "tfidf-cosine");
    }
}
