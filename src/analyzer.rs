//! TF-IDF search for stored articles resembling a claim.
//!
//! The finder runs once per corpus: the verified ("good") corpus and the
//! disinformation ("bad") corpus are searched independently and their hits
//! are reported as two separate ranked lists, never merged.

use crate::models::{ArticleRecord, SimilarArticle};
use crate::nlp::NlpContext;
use crate::similarity::tfidf_cosine;
use tracing::{debug, info, instrument};

/// Default minimum similarity (exclusive) for a hit.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Finds articles similar to a claim by lemma-level TF-IDF cosine.
#[derive(Debug)]
pub struct ArticleAnalyzer<'a> {
    nlp: &'a NlpContext,
}

impl<'a> ArticleAnalyzer<'a> {
    pub fn new(nlp: &'a NlpContext) -> Self {
        Self { nlp }
    }

    /// Return every article whose similarity to `claim_text` exceeds
    /// `threshold`, tagged with `is_bad` and sorted by descending similarity.
    ///
    /// Articles with neither a title nor a description are skipped.
    #[instrument(level = "debug", skip_all, fields(articles = articles.len(), is_bad = is_bad, threshold = threshold))]
    pub fn find_similar(
        &self,
        claim_text: &str,
        articles: &[ArticleRecord],
        is_bad: bool,
        threshold: f64,
    ) -> Vec<SimilarArticle> {
        let claim_lemmas = self.nlp.lemmatize(claim_text);

        let mut results: Vec<SimilarArticle> = articles
            .iter()
            .filter(|article| !(article.title.is_empty() && article.description.is_empty()))
            .filter_map(|article| {
                let article_lemmas = self.nlp.lemmatize(&article.combined_text());
                let similarity = tfidf_cosine(&claim_lemmas, &article_lemmas);
                debug!(link = %article.link, similarity, "Scored article");
                (similarity > threshold).then(|| SimilarArticle {
                    title: article.title.clone(),
                    link: article.link.clone(),
                    description: article.description.clone(),
                    similarity,
                    is_bad,
                })
            })
            .collect();

        results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        info!(hits = results.len(), is_bad, "Similar-article search complete");
        results
    }
}
