//! Veracity scoring of a claim against a corpus of fact-checked articles.
//!
//! For every article the evaluator computes three signals, all in `[0, 1]`:
//!
//! - **title similarity**: normalized claim vs normalized title
//! - **description similarity**: normalized claim vs normalized description
//! - **keyword overlap**: Jaccard overlap of claim and article stems
//!
//! and combines them as `0.4 * title + 0.4 * description + 0.2 * overlap`.
//! Articles scoring above [`MATCH_THRESHOLD`] become matches. The best match
//! is weighted by the trust level of the source to get the veracity score,
//! which is then bucketed into a [`Verdict`].

use crate::models::{ArticleRecord, MatchResult, VeracityResult, Verdict};
use crate::nlp::{keyword_overlap, normalize, NlpContext};
use crate::similarity::{SequenceRatio, SimilarityStrategy};
use crate::trust::TrustRegistry;
use tracing::{debug, info, instrument};

/// Minimum match score (exclusive) for an article to count as a match.
pub const MATCH_THRESHOLD: f64 = 0.3;

const TITLE_WEIGHT: f64 = 0.4;
const DESCRIPTION_WEIGHT: f64 = 0.4;
const KEYWORD_WEIGHT: f64 = 0.2;

/// Each match adds this much confidence, capped at `1.0`.
const CONFIDENCE_PER_MATCH: f64 = 0.2;

/// Weighted combination of the three per-article signals.
pub fn match_score(title_similarity: f64, description_similarity: f64, keyword_overlap: f64) -> f64 {
    TITLE_WEIGHT * title_similarity
        + DESCRIPTION_WEIGHT * description_similarity
        + KEYWORD_WEIGHT * keyword_overlap
}

/// Best match score weighted by how much the source is trusted.
pub fn veracity_score(best_match_score: f64, trust_level: f64) -> f64 {
    best_match_score * trust_level
}

struct PreparedClaim {
    normalized: String,
    keywords: Vec<String>,
}

/// Scores claims against article lists.
///
/// Borrows the shared [`NlpContext`] and [`TrustRegistry`]; holds no
/// per-call state, so one evaluator can serve any number of claims.
pub struct VeracityEvaluator<'a, S = SequenceRatio> {
    nlp: &'a NlpContext,
    registry: &'a TrustRegistry,
    strategy: S,
}

impl<'a> VeracityEvaluator<'a, SequenceRatio> {
    pub fn new(nlp: &'a NlpContext, registry: &'a TrustRegistry) -> Self {
        Self::with_strategy(nlp, registry, SequenceRatio)
    }
}

impl<'a, S: SimilarityStrategy> VeracityEvaluator<'a, S> {
    pub fn with_strategy(nlp: &'a NlpContext, registry: &'a TrustRegistry, strategy: S) -> Self {
        Self {
            nlp,
            registry,
            strategy,
        }
    }

    fn prepare(&self, claim_text: &str) -> PreparedClaim {
        let normalized = normalize(claim_text);
        let keywords = self.nlp.extract_keywords(&normalized);
        PreparedClaim {
            normalized,
            keywords,
        }
    }

    fn score_prepared(&self, claim: &PreparedClaim, article: &ArticleRecord) -> MatchResult {
        let article_keywords = self
            .nlp
            .extract_keywords(&normalize(&article.combined_text()));

        let title_similarity = self
            .strategy
            .score(&claim.normalized, &normalize(&article.title));
        let description_similarity = self
            .strategy
            .score(&claim.normalized, &normalize(&article.description));
        let overlap = keyword_overlap(&claim.keywords, &article_keywords);

        MatchResult {
            article: article.clone(),
            match_score: match_score(title_similarity, description_similarity, overlap),
            title_similarity,
            description_similarity,
            keyword_overlap: overlap,
        }
    }

    /// Compute the per-article signals for a single claim/article pair,
    /// whether or not the article clears the match threshold.
    #[cfg(test)]
    pub fn score_article(&self, claim_text: &str, article: &ArticleRecord) -> MatchResult {
        self.score_prepared(&self.prepare(claim_text), article)
    }

    /// Score `claim_text` against `articles`, weighting the best match by
    /// the trust level of `trust_source_name`.
    ///
    /// An empty claim or an empty article list yields
    /// [`VeracityResult::unknown`].
    #[instrument(level = "debug", skip_all, fields(articles = articles.len(), source = %trust_source_name, strategy = self.strategy.name()))]
    pub fn evaluate(
        &self,
        claim_text: &str,
        articles: &[ArticleRecord],
        trust_source_name: &str,
    ) -> VeracityResult {
        let claim = self.prepare(claim_text);
        if claim.normalized.is_empty() {
            debug!("Claim is empty after normalization");
            return VeracityResult::unknown();
        }

        let mut matches: Vec<MatchResult> = articles
            .iter()
            .map(|article| self.score_prepared(&claim, article))
            .filter(|m| m.match_score > MATCH_THRESHOLD)
            .collect();

        // Stable: ties keep corpus order.
        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        let Some(best_score) = matches.first().map(|m| m.match_score) else {
            info!("No article cleared the match threshold");
            return VeracityResult::unknown();
        };

        let trust = self.registry.get_trust_level(trust_source_name);
        let veracity_score = veracity_score(best_score, trust);
        let confidence = (matches.len() as f64 * CONFIDENCE_PER_MATCH).min(1.0);
        let verdict = Verdict::from_score(veracity_score);

        info!(
            matches = matches.len(),
            best_score,
            trust,
            veracity_score,
            confidence,
            %verdict,
            "Evaluated claim"
        );

        VeracityResult {
            veracity_score,
            confidence,
            matches,
            verdict,
        }
    }
}
